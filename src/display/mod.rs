pub mod hierarchy;
pub mod table;

pub use hierarchy::render_hierarchy;
pub use table::{render_report, render_table};
