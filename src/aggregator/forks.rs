//! Fork counts keyed by repository name.

use crate::report::schema::{ForkMap, RepositoryRecord};

/// Build the repository name -> fork count map
///
/// A repeated name keeps the fork count of its last occurrence.
pub fn build_fork_map(repos: &[RepositoryRecord]) -> ForkMap {
    let mut forks = ForkMap::with_capacity(repos.len());
    for repo in repos {
        forks.insert(repo.name.clone(), repo.forks);
    }
    forks
}
