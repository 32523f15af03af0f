//! Wire types for the GitHub REST API.
//!
//! Only the fields the report needs are decoded; everything else in the
//! payloads is ignored by serde.

use crate::report::schema::{RepositoryRecord, UserProfile};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// `GET /users/{username}` response
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub login: String,

    /// Display name, `null` when the user never set one
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub followers: u64,

    #[serde(default)]
    pub following: u64,

    #[serde(default)]
    pub public_repos: u64,
}

/// One element of `GET /users/{username}/repos`
#[derive(Debug, Clone, Deserialize)]
pub struct RepoResponse {
    pub name: String,

    /// GitHub sends both `forks` and `forks_count` with the same value
    #[serde(default, alias = "forks")]
    pub forks_count: u64,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// `GET /repos/{owner}/{repo}/languages` response: language -> bytes
pub type LanguagesResponse = HashMap<String, u64>;

impl From<UserResponse> for UserProfile {
    fn from(user: UserResponse) -> Self {
        Self {
            name: user.name.unwrap_or_default(),
            login: user.login,
            bio: user.bio.unwrap_or_default(),
            followers: user.followers,
            following: user.following,
            public_repos: user.public_repos,
        }
    }
}

impl From<RepoResponse> for RepositoryRecord {
    fn from(repo: RepoResponse) -> Self {
        // Language byte-counts come from a separate lookup
        RepositoryRecord::new(repo.name, repo.forks_count, repo.created_at, repo.updated_at)
    }
}
