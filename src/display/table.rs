//! Aligned plain-text table rendering.
//!
//! Column width is the maximum display width of the header and every value
//! in that column, computed independently per column. Widths use
//! `unicode-width` so Cyrillic headers line up the same as ASCII.

use crate::core::model::{DepartmentSummary, REPORT_FIELDS};
use crate::utils::text::pad_to_width;
use unicode_width::UnicodeWidthStr;

/// Message emitted instead of a table when there are no rows.
pub const EMPTY_REPORT_MESSAGE: &str = "The report is empty.";

const COLUMN_SEPARATOR: &str = " | ";

/// Render a header row, a dash separator row, then one line per record.
/// Cells are right-padded with spaces to the column width. An empty row
/// set produces only [`EMPTY_REPORT_MESSAGE`].
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return format!("{}\n", EMPTY_REPORT_MESSAGE);
    }

    let widths = column_widths(headers, rows);
    let mut output = String::new();

    let header_cells: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad_to_width(header, *width))
        .collect();
    output.push_str(&header_cells.join(COLUMN_SEPARATOR));
    output.push('\n');

    let separator_cells: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    output.push_str(&separator_cells.join(COLUMN_SEPARATOR));
    output.push('\n');

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(value, width)| pad_to_width(value, *width))
            .collect();
        output.push_str(&cells.join(COLUMN_SEPARATOR));
        output.push('\n');
    }

    output
}

/// Render the department summary report with its fixed header.
pub fn render_report(report: &[DepartmentSummary]) -> String {
    let rows: Vec<Vec<String>> = report.iter().map(DepartmentSummary::to_row).collect();
    render_table(&REPORT_FIELDS, &rows)
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            rows.iter()
                .filter_map(|row| row.get(column))
                .map(|value| value.width())
                .fold(header.width(), usize::max)
        })
        .collect()
}
