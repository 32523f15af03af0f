//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod report;

// Re-export main command functions
pub use report::{
    execute_report, parse_usernames, read_usernames, report_users, validate_args, ReportArgs,
    RunSummary,
};
