//! Report data model.
//!
//! All mappings are `HashMap`s: key order carries no meaning, and
//! comparisons between reports must not depend on it. Serialized reports
//! list keys in sorted order so repeated runs diff cleanly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

/// Language name -> percentage of the user's total code bytes
pub type LanguageDistribution = HashMap<String, f64>;

/// Repository name -> fork count
pub type ForkMap = HashMap<String, u64>;

/// Year -> [created, updated, created + updated]
pub type ActivityHistogram = HashMap<i32, [u64; 3]>;

/// Metadata for one repository owned by the user
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryRecord {
    pub name: String,
    pub forks: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Language -> bytes of code; empty until the language lookup runs
    pub languages: HashMap<String, u64>,
}

impl RepositoryRecord {
    /// Create a record without language data
    pub fn new(
        name: impl Into<String>,
        forks: u64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            forks,
            created_at,
            updated_at,
            languages: HashMap::new(),
        }
    }

    /// Attach the language byte-counts
    pub fn with_languages(mut self, languages: HashMap<String, u64>) -> Self {
        self.languages = languages;
        self
    }
}

/// Profile fields copied into the report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub login: String,
    pub bio: String,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
}

/// Aggregated statistics for one user, emitted once and then dropped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserReport {
    /// Display name
    pub name: String,

    /// Login the statistics were fetched for
    pub username: String,

    pub bio: String,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,

    /// Percentage of code bytes per language
    #[serde(serialize_with = "serialize_sorted")]
    pub language_distribution: LanguageDistribution,

    /// Fork count per repository
    #[serde(serialize_with = "serialize_sorted")]
    pub repo_forks: ForkMap,

    /// Per-year creation/update counters
    #[serde(serialize_with = "serialize_sorted")]
    pub activity: ActivityHistogram,
}

/// Serialize a hash map with its keys in ascending order
fn serialize_sorted<K, V, S>(map: &HashMap<K, V>, serializer: S) -> Result<S::Ok, S::Error>
where
    K: Ord + Serialize,
    V: Serialize,
    S: Serializer,
{
    serializer.collect_map(map.iter().collect::<BTreeMap<_, _>>())
}
