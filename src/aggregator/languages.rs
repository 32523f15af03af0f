//! Language distribution across all of a user's repositories.

use crate::report::schema::{LanguageDistribution, RepositoryRecord};
use log::debug;
use std::collections::HashMap;

/// Calculate the share of code bytes per language
///
/// **Public** - main entry point for language statistics
///
/// # Arguments
/// * `repos` - Repositories with their language byte-counts attached
///
/// # Returns
/// Language -> percentage of the grand total. Languages whose total is zero
/// are left out, and the map is empty when no repository reports any bytes.
pub fn calculate_language_distribution(repos: &[RepositoryRecord]) -> LanguageDistribution {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    let mut grand_total: u64 = 0;

    for repo in repos {
        for (language, bytes) in &repo.languages {
            *totals.entry(language.as_str()).or_insert(0) += bytes;
            grand_total += bytes;
        }
    }

    if grand_total == 0 {
        debug!("No language bytes across {} repositories", repos.len());
        return LanguageDistribution::new();
    }

    totals
        .into_iter()
        .filter(|(_, bytes)| *bytes > 0)
        .map(|(language, bytes)| {
            let percentage = (bytes as f64 / grand_total as f64) * 100.0;
            (language.to_string(), percentage)
        })
        .collect()
}
