//! Output writers for user reports.

pub mod json;

// Re-export main functions
pub use json::{open_report_file, report_to_string, write_report};
