use unicode_width::UnicodeWidthStr;

/// Right-pad `text` with spaces to `width` display columns. Text already at
/// or past the width is returned unchanged.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - text_width))
    }
}
