//! Assemble a full user report from the data source.
//!
//! Fetch order is strictly sequential:
//! 1. Profile
//! 2. Repository listing
//! 3. Languages, one repository at a time
//! 4. Aggregation over the complete record set
//!
//! Any fetch failure aborts the whole report; nothing partial escapes.

use super::schema::{RepositoryRecord, UserProfile, UserReport};
use crate::aggregator::{build_activity_histogram, build_fork_map, calculate_language_distribution};
use crate::api::RepositoryDataSource;
use crate::utils::error::ApiError;
use log::debug;

/// Build the report for one username
///
/// **Public** - the single per-username entry point used by the CLI loop
///
/// # Arguments
/// * `source` - Where profiles, repositories and languages come from
/// * `username` - Name as listed in the input file
///
/// # Errors
/// Returns the first `ApiError` raised by any fetch.
pub fn build_report<S>(source: &S, username: &str) -> Result<UserReport, ApiError>
where
    S: RepositoryDataSource + ?Sized,
{
    debug!("Building report for {}", username);

    let profile = source.fetch_user_profile(username)?;

    // The canonical login drives every follow-up request
    let repos = fetch_repositories_with_languages(source, &profile.login)?;

    Ok(assemble_report(profile, &repos))
}

/// Fetch the repository listing and attach each repository's languages
///
/// **Public** - reusable when only the raw records are needed
pub fn fetch_repositories_with_languages<S>(
    source: &S,
    login: &str,
) -> Result<Vec<RepositoryRecord>, ApiError>
where
    S: RepositoryDataSource + ?Sized,
{
    let repos = source.fetch_user_repositories(login)?;

    repos
        .into_iter()
        .map(|repo| {
            let languages = source.fetch_repository_languages(login, &repo.name)?;
            Ok(repo.with_languages(languages))
        })
        .collect()
}

/// Combine a profile with the three aggregates over `repos`
pub fn assemble_report(profile: UserProfile, repos: &[RepositoryRecord]) -> UserReport {
    UserReport {
        name: profile.name,
        username: profile.login,
        bio: profile.bio,
        followers: profile.followers,
        following: profile.following,
        public_repos: profile.public_repos,
        language_distribution: calculate_language_distribution(repos),
        repo_forks: build_fork_map(repos),
        activity: build_activity_histogram(repos),
    }
}
