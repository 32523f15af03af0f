//! In-memory data source shared by the integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use gh_user_report::api::RepositoryDataSource;
use gh_user_report::report::{RepositoryRecord, UserProfile};
use gh_user_report::utils::ApiError;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// Midyear timestamp in `year`
pub fn year(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 6, 15, 12, 0, 0).unwrap()
}

pub fn repo(name: &str, forks: u64, created: i32, updated: i32) -> RepositoryRecord {
    RepositoryRecord::new(name, forks, year(created), year(updated))
}

pub fn languages(pairs: &[(&str, u64)]) -> HashMap<String, u64> {
    pairs.iter().map(|(l, b)| (l.to_string(), *b)).collect()
}

pub fn profile(login: &str) -> UserProfile {
    UserProfile {
        name: format!("{} display", login),
        login: login.to_string(),
        bio: String::new(),
        followers: 1,
        following: 2,
        public_repos: 3,
    }
}

fn not_found(url: String) -> ApiError {
    ApiError::UnexpectedStatus {
        url,
        status: "404 Not Found".to_string(),
    }
}

#[derive(Default)]
pub struct FakeSource {
    profiles: HashMap<String, UserProfile>,
    repos: HashMap<String, Vec<RepositoryRecord>>,
    languages: HashMap<(String, String), HashMap<String, u64>>,
    broken_languages: HashSet<(String, String)>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user; `lookup` is the name the profile is fetched under
    pub fn with_user(mut self, lookup: &str, profile: UserProfile) -> Self {
        self.repos.entry(profile.login.clone()).or_default();
        self.profiles.insert(lookup.to_string(), profile);
        self
    }

    pub fn with_repo(
        mut self,
        login: &str,
        repo: RepositoryRecord,
        langs: HashMap<String, u64>,
    ) -> Self {
        self.languages
            .insert((login.to_string(), repo.name.clone()), langs);
        self.repos.entry(login.to_string()).or_default().push(repo);
        self
    }

    pub fn with_broken_languages(mut self, login: &str, repo_name: &str) -> Self {
        self.broken_languages
            .insert((login.to_string(), repo_name.to_string()));
        self
    }
}

impl RepositoryDataSource for FakeSource {
    fn fetch_user_profile(&self, username: &str) -> Result<UserProfile, ApiError> {
        self.calls.borrow_mut().push(format!("profile:{}", username));
        self.profiles
            .get(username)
            .cloned()
            .ok_or_else(|| not_found(format!("users/{}", username)))
    }

    fn fetch_user_repositories(&self, username: &str) -> Result<Vec<RepositoryRecord>, ApiError> {
        self.calls.borrow_mut().push(format!("repos:{}", username));
        self.repos
            .get(username)
            .cloned()
            .ok_or_else(|| not_found(format!("users/{}/repos", username)))
    }

    fn fetch_repository_languages(
        &self,
        username: &str,
        repo_name: &str,
    ) -> Result<HashMap<String, u64>, ApiError> {
        self.calls
            .borrow_mut()
            .push(format!("languages:{}/{}", username, repo_name));
        let key = (username.to_string(), repo_name.to_string());
        if self.broken_languages.contains(&key) {
            return Err(not_found(format!("repos/{}/{}/languages", username, repo_name)));
        }
        Ok(self.languages.get(&key).cloned().unwrap_or_default())
    }
}
