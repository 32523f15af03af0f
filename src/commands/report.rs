//! Report command implementation.
//!
//! The report command:
//! 1. Reads usernames from the input file
//! 2. Builds the API client from the configuration
//! 3. Builds one report per username, in file order
//! 4. Writes each report followed by a separator line
//!
//! A username whose report fails is skipped; the rest of the run continues.

use crate::api::{GithubClient, RepositoryDataSource};
use crate::output::{open_report_file, write_report};
use crate::report::build_report;
use crate::utils::config::Config;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct ReportArgs {
    /// Newline-delimited file of usernames
    pub users_file: PathBuf,

    /// API configuration (token, base URL, timeout)
    pub config: Config,

    /// Write reports here instead of stdout
    pub output: Option<PathBuf>,
}

/// Outcome counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub reported: usize,
    pub skipped: usize,
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input file cannot be read (aborts the whole run)
/// * API client cannot be constructed
/// * Output cannot be opened or written
pub fn execute_report(args: ReportArgs) -> Result<RunSummary> {
    let start_time = Instant::now();

    let usernames = read_usernames(&args.users_file)?;
    info!(
        "Loaded {} usernames from {}",
        usernames.len(),
        args.users_file.display()
    );

    let client = GithubClient::new(&args.config).context("Failed to create API client")?;
    debug!("API endpoint: {}", args.config.api_base_url);

    let summary = match &args.output {
        Some(path) => {
            let file = open_report_file(path)
                .with_context(|| format!("Failed to open output file {}", path.display()))?;
            info!("Writing reports to: {}", path.display());
            report_users(&client, &usernames, file)?
        }
        None => report_users(&client, &usernames, std::io::stdout().lock())?,
    };

    info!(
        "Done in {:.2}s: {} reported, {} skipped",
        start_time.elapsed().as_secs_f64(),
        summary.reported,
        summary.skipped
    );

    Ok(summary)
}

/// Build and emit a report for each username in order
///
/// **Public** - the per-username loop, independent of the real API
///
/// Fetch failures skip the username; only output failures end the run.
pub fn report_users<S, W>(source: &S, usernames: &[String], mut writer: W) -> Result<RunSummary>
where
    S: RepositoryDataSource + ?Sized,
    W: Write,
{
    let mut summary = RunSummary::default();

    for username in usernames {
        let report = match build_report(source, username) {
            Ok(report) => report,
            Err(e) => {
                debug!("Skipping {}: {}", username, e);
                summary.skipped += 1;
                continue;
            }
        };

        write_report(&mut writer, &report)
            .with_context(|| format!("Failed to write report for {}", username))?;
        summary.reported += 1;
    }

    Ok(summary)
}

/// Read usernames, one per line
///
/// **Public** - can be called on its own to check the input file
///
/// Lines are trimmed and blank lines dropped; order is preserved.
pub fn read_usernames(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read usernames file {}", path.display()))?;

    Ok(parse_usernames(&contents))
}

/// Split file contents into usernames
pub fn parse_usernames(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.users_file.as_os_str().is_empty() {
        anyhow::bail!("Usernames file path cannot be empty");
    }

    let url = &args.config.api_base_url;
    if url.is_empty() {
        anyhow::bail!("API URL cannot be empty");
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("API URL must start with http:// or https://");
    }

    if args.config.timeout.is_zero() {
        anyhow::bail!("Timeout must be greater than 0");
    }

    Ok(())
}
