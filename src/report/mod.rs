// Report module for the stock overview page
//
// Turns a provider record into display strings and renders the page around
// them, as markdown for the terminal or HTML for the web form.

pub mod display;
pub mod formatter;
pub mod page;
pub mod render;

// Re-export main types
pub use display::{build_display_record, DisplayOverviewRecord, LABELS};
pub use formatter::{add_dollar_sign, format_large_number, format_percentage};
pub use render::{render_html, render_markdown};
