//! GH User Report
//!
//! Per-user statistics from the GitHub REST API: language distribution,
//! fork counts and yearly repository activity.
//!
//! This crate provides the core implementation for the
//! `gh-user-report` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! export GITHUB_TOKEN=ghp_...
//! gh-user-report users.txt
//! ```

pub mod aggregator;
pub mod api;
pub mod commands;
pub mod output;
pub mod report;
pub mod utils;
