//! Aggregation of repository records into per-user statistics.
//!
//! This module transforms fetched repositories into:
//! - Language distribution (percentage of code bytes per language)
//! - Fork map (fork count per repository)
//! - Activity histogram (creation/update counts per year)

pub mod activity;
pub mod forks;
pub mod languages;

// Re-export main functions
pub use activity::build_activity_histogram;
pub use forks::build_fork_map;
pub use languages::calculate_language_distribution;
