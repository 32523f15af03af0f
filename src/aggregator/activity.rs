//! Year-bucketed repository activity.
//!
//! Each year maps to three counters:
//! - `[0]` repositories created that year
//! - `[1]` repositories last updated that year
//! - `[2]` touches that year, i.e. `[0] + [1]`
//!
//! A repository created and updated in the same year counts twice in `[2]`.

use crate::report::schema::{ActivityHistogram, RepositoryRecord};
use chrono::Datelike;

/// Index of the "created" counter
pub const CREATED: usize = 0;

/// Index of the "last updated" counter
pub const UPDATED: usize = 1;

/// Index of the combined counter
pub const TOUCHED: usize = 2;

/// Build the per-year activity histogram
///
/// **Public** - main entry point for activity statistics
///
/// # Arguments
/// * `repos` - Repositories with creation and update timestamps
///
/// # Returns
/// Year -> counters; a year is present only if some repository was created
/// or updated in it.
pub fn build_activity_histogram(repos: &[RepositoryRecord]) -> ActivityHistogram {
    let mut histogram = ActivityHistogram::new();

    for repo in repos {
        let created = histogram.entry(repo.created_at.year()).or_insert([0; 3]);
        created[CREATED] += 1;
        created[TOUCHED] += 1;

        let updated = histogram.entry(repo.updated_at.year()).or_insert([0; 3]);
        updated[UPDATED] += 1;
        updated[TOUCHED] += 1;
    }

    histogram
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn repo(created: i32, updated: i32) -> RepositoryRecord {
        RepositoryRecord::new(
            "r",
            0,
            Utc.with_ymd_and_hms(created, 2, 1, 12, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(updated, 11, 30, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_split_years() {
        let histogram = build_activity_histogram(&[repo(2020, 2021)]);

        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram[&2020], [1, 0, 1]);
        assert_eq!(histogram[&2021], [0, 1, 1]);
    }

    #[test]
    fn test_same_year_double_counts_touches() {
        let histogram = build_activity_histogram(&[repo(2022, 2022)]);

        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram[&2022], [1, 1, 2]);
    }

    #[test]
    fn test_touched_is_sum_of_created_and_updated() {
        let repos = vec![repo(2019, 2023), repo(2019, 2019), repo(2021, 2023), repo(2023, 2023)];
        let histogram = build_activity_histogram(&repos);

        assert!(!histogram.contains_key(&2020));
        assert!(!histogram.contains_key(&2022));
        for counters in histogram.values() {
            assert_eq!(counters[TOUCHED], counters[CREATED] + counters[UPDATED]);
        }
        assert_eq!(histogram[&2019], [2, 1, 3]);
        assert_eq!(histogram[&2023], [1, 3, 4]);
    }

    #[test]
    fn test_empty() {
        assert!(build_activity_histogram(&[]).is_empty());
    }
}
