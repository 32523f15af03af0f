//! GH User Report CLI
//!
//! Reads usernames from a file and prints one JSON report per user.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::debug;
use std::path::PathBuf;
use std::time::Duration;

use gh_user_report::commands::{execute_report, validate_args, ReportArgs};
use gh_user_report::utils::config::{load_env_file, Config, DEFAULT_API_BASE_URL};

/// GH User Report - per-user GitHub repository statistics
#[derive(Parser, Debug)]
#[command(name = "gh-user-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Newline-delimited file of usernames
    users_file: Option<PathBuf>,

    /// GitHub access token, sent as a bearer credential
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GitHub API base URL
    #[arg(long, default_value = DEFAULT_API_BASE_URL)]
    api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Append reports to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // .env must be loaded before clap reads GITHUB_TOKEN
    let dotenv = load_env_file(None);

    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded ({}); using process environment", e),
    }

    let Some(users_file) = cli.users_file else {
        println!("Please provide a usernames file as argument.");
        println!();
        Cli::command().print_help()?;
        return Ok(());
    };

    let args = ReportArgs {
        users_file,
        config: Config::new(cli.token)
            .with_api_base_url(cli.api_url)
            .with_timeout(Duration::from_secs(cli.timeout)),
        output: cli.output,
    };

    // Validate args first
    validate_args(&args)?;

    execute_report(args)?;

    Ok(())
}
