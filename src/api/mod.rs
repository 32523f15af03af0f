//! Remote data source for user profiles and repositories.
//!
//! The report builder only sees the [`RepositoryDataSource`] trait;
//! [`GithubClient`] is the production implementation over the REST API.

pub mod client;
pub mod types;

pub use client::GithubClient;

use crate::report::schema::{RepositoryRecord, UserProfile};
use crate::utils::error::ApiError;
use std::collections::HashMap;

/// Supplies profiles, repository listings and per-repository languages
pub trait RepositoryDataSource {
    /// Fetch the profile of `username`
    fn fetch_user_profile(&self, username: &str) -> Result<UserProfile, ApiError>;

    /// Fetch the repositories owned by `username`, without language data
    fn fetch_user_repositories(&self, username: &str) -> Result<Vec<RepositoryRecord>, ApiError>;

    /// Fetch the language -> byte-count mapping of one repository
    fn fetch_repository_languages(
        &self,
        username: &str,
        repo_name: &str,
    ) -> Result<HashMap<String, u64>, ApiError>;
}
