//! HTTP client for the GitHub REST API.

use super::types::{LanguagesResponse, RepoResponse, UserResponse};
use super::RepositoryDataSource;
use crate::report::schema::{RepositoryRecord, UserProfile};
use crate::utils::config::{Config, GITHUB_ACCEPT, REPOS_PER_PAGE, USER_AGENT};
use crate::utils::error::ApiError;
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Blocking GitHub API client
pub struct GithubClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl GithubClient {
    /// Create a new client from the process configuration
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let base_url = parse_base_url(&config.api_base_url)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::RequestFailed)?;

        Ok(Self {
            client,
            base_url,
            token: config.token.clone(),
        })
    }

    /// GET a URL and decode its JSON body
    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!("GET {}", url);

        let url_text = url.to_string();
        let mut request = self.client.get(url).header(ACCEPT, GITHUB_ACCEPT);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(ApiError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                url: url_text,
                status: status.to_string(),
            });
        }

        let body = response.text().map_err(ApiError::RequestFailed)?;

        serde_json::from_str(&body).map_err(|source| ApiError::DecodeFailed {
            url: url_text,
            source,
        })
    }
}

impl RepositoryDataSource for GithubClient {
    fn fetch_user_profile(&self, username: &str) -> Result<UserProfile, ApiError> {
        let url = user_url(&self.base_url, username)?;
        let user: UserResponse = self.get_json(url)?;
        Ok(user.into())
    }

    fn fetch_user_repositories(&self, username: &str) -> Result<Vec<RepositoryRecord>, ApiError> {
        let url = user_repos_url(&self.base_url, username)?;
        let repos: Vec<RepoResponse> = self.get_json(url)?;
        debug!("{} repositories listed for {}", repos.len(), username);
        Ok(repos.into_iter().map(RepositoryRecord::from).collect())
    }

    fn fetch_repository_languages(
        &self,
        username: &str,
        repo_name: &str,
    ) -> Result<HashMap<String, u64>, ApiError> {
        let url = repo_languages_url(&self.base_url, username, repo_name)?;
        let languages: LanguagesResponse = self.get_json(url)?;
        Ok(languages)
    }
}

/// Parse the configured base URL; it must be able to carry path segments
pub fn parse_base_url(base_url: &str) -> Result<Url, ApiError> {
    let url = Url::parse(base_url)
        .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
    }

    Ok(url)
}

/// Append path segments to `base`, escaping each one
///
/// Names that would be empty or move up the path are rejected.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, ApiError> {
    if let Some(bad) = segments
        .iter()
        .find(|s| s.is_empty() || **s == "." || **s == "..")
    {
        return Err(ApiError::InvalidPathSegment(bad.to_string()));
    }

    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

/// `{base}/users/{username}`
pub fn user_url(base: &Url, username: &str) -> Result<Url, ApiError> {
    endpoint(base, &["users", username])
}

/// `{base}/users/{username}/repos`, first page only
pub fn user_repos_url(base: &Url, username: &str) -> Result<Url, ApiError> {
    let mut url = endpoint(base, &["users", username, "repos"])?;
    url.query_pairs_mut()
        .append_pair("per_page", &REPOS_PER_PAGE.to_string());
    Ok(url)
}

/// `{base}/repos/{owner}/{repo}/languages`
pub fn repo_languages_url(base: &Url, owner: &str, repo_name: &str) -> Result<Url, ApiError> {
    endpoint(base, &["repos", owner, repo_name, "languages"])
}
