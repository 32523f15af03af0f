//! Configuration and constants for the CLI.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default GitHub REST API endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Default timeout for API requests
pub const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(30);

/// Media type requested on every call
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// GitHub rejects requests without a User-Agent
pub const USER_AGENT: &str = concat!("gh-user-report/", env!("CARGO_PKG_VERSION"));

/// Repositories requested per listing call (single page only)
pub const REPOS_PER_PAGE: u32 = 100;

/// Line printed after every emitted report
pub const REPORT_SEPARATOR: &str = "-------------";

/// Runtime configuration for outbound API requests
///
/// Built once at process start and handed to the client; nothing below
/// `main` reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token; `None` means anonymous, rate-limited access
    pub token: Option<String>,

    /// Base URL without trailing slash
    pub api_base_url: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: DEFAULT_API_TIMEOUT,
        }
    }
}

impl Config {
    /// Create a config for the default endpoint with an optional token
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
            ..Default::default()
        }
    }

    /// Point the client at another API host (GitHub Enterprise, test servers)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Load `KEY=value` pairs from a `.env` file into the process environment
///
/// With no path, `.env` is searched for in the current directory and its
/// ancestors. Variables already set in the environment are not overridden.
/// A missing file is not fatal; callers decide whether to mention it.
pub fn load_env_file(path: Option<&Path>) -> Result<PathBuf, dotenvy::Error> {
    match path {
        Some(path) => dotenvy::from_path(path).map(|_| path.to_path_buf()),
        None => dotenvy::dotenv(),
    }
}
