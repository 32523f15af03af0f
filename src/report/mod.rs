//! Report data model and assembly.

pub mod builder;
pub mod schema;

// Re-export main types
pub use builder::{assemble_report, build_report, fetch_repositories_with_languages};
pub use schema::{
    ActivityHistogram, ForkMap, LanguageDistribution, RepositoryRecord, UserProfile, UserReport,
};
