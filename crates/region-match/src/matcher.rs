//! Multi-strategy region resolution.
//!
//! A query is normalized once, then checked against the catalog in stages.
//! Each stage is an ordered list of [`Strategy`] values; within a stage,
//! entries are visited in catalog order and the first entry accepted by any
//! strategy of the stage wins. There is no scoring across candidates.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, CatalogEntry};
use crate::distance::levenshtein;
use crate::normalize::normalize;

/// Minimum canonical query length before substring containment is tried.
pub const DEFAULT_MIN_SUBSTRING_LEN: usize = 6;

/// Largest edit distance accepted by the fuzzy strategies.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;

/// Matching thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Substring containment needs at least this many normalized query chars.
    pub min_substring_len: usize,
    /// Fuzzy strategies accept distances up to and including this value.
    ///
    /// Applied uniformly, so very short keys or aliases can match unrelated
    /// short queries.
    pub max_edit_distance: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            min_substring_len: DEFAULT_MIN_SUBSTRING_LEN,
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
        }
    }
}

/// A single way of deciding whether a query names a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Query key equals the entry key.
    Exact,
    /// Query key equals a registered alias key.
    Alias,
    /// Query key contains the entry key or is contained by it.
    Substring,
    /// Query key is within the edit-distance threshold of the entry key.
    FuzzyKey,
    /// Query key is within the edit-distance threshold of an alias key.
    FuzzyAlias,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Exact => "exact",
            Strategy::Alias => "alias",
            Strategy::Substring => "substring",
            Strategy::FuzzyKey => "fuzzy_key",
            Strategy::FuzzyAlias => "fuzzy_alias",
        }
    }

    fn accepts(self, query: &str, candidate: &IndexedEntry, config: &MatcherConfig) -> bool {
        match self {
            Strategy::Exact => query == candidate.key,
            Strategy::Alias => candidate.aliases.iter().any(|alias| alias == query),
            Strategy::Substring => {
                query.chars().count() >= config.min_substring_len
                    && (query.contains(candidate.key.as_str())
                        || candidate.key.contains(query))
            }
            Strategy::FuzzyKey => levenshtein(query, &candidate.key) <= config.max_edit_distance,
            Strategy::FuzzyAlias => candidate
                .aliases
                .iter()
                .any(|alias| levenshtein(query, alias) <= config.max_edit_distance),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolution stages, tried in order.
///
/// The first stage finds exact matches anywhere in the catalog before any
/// looser strategy is allowed to claim an earlier entry. The second stage
/// repeats the exact check so it stands alone if stages are reordered.
const STAGES: &[&[Strategy]] = &[
    &[Strategy::Exact],
    &[
        Strategy::Exact,
        Strategy::Alias,
        Strategy::Substring,
        Strategy::FuzzyKey,
        Strategy::FuzzyAlias,
    ],
];

/// Catalog entry with its canonical key and canonical aliases.
#[derive(Debug)]
struct IndexedEntry {
    entry: CatalogEntry,
    key: String,
    aliases: Vec<String>,
}

/// Outcome of resolving a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// An entry was identified by `strategy`.
    Matched {
        entry: &'a CatalogEntry,
        strategy: Strategy,
    },
    /// No strategy accepted any entry.
    NotFound,
}

impl<'a> Resolution<'a> {
    /// The matched entry, if any.
    pub fn entry(&self) -> Option<&'a CatalogEntry> {
        match *self {
            Resolution::Matched { entry, .. } => Some(entry),
            Resolution::NotFound => None,
        }
    }

    /// The strategy that produced the match, if any.
    pub fn strategy(&self) -> Option<Strategy> {
        match *self {
            Resolution::Matched { strategy, .. } => Some(strategy),
            Resolution::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Matched { .. })
    }
}

/// Resolves free-text region names against a catalog.
///
/// Canonical keys and aliases are computed once on construction; the matcher
/// is read-only afterwards and can be shared across threads.
#[derive(Debug)]
pub struct RegionMatcher {
    entries: Vec<IndexedEntry>,
    config: MatcherConfig,
}

impl RegionMatcher {
    /// Build a matcher with default thresholds.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, MatcherConfig::default())
    }

    /// Build a matcher with explicit thresholds.
    pub fn with_config(catalog: Catalog, config: MatcherConfig) -> Self {
        let entries = catalog
            .entries()
            .iter()
            .map(|entry| {
                let aliases = catalog
                    .aliases()
                    .aliases_for(&entry.region)
                    .iter()
                    .map(|alias| normalize(alias))
                    .filter(|alias| !alias.is_empty())
                    .collect();
                IndexedEntry {
                    key: normalize(&entry.region),
                    entry: entry.clone(),
                    aliases,
                }
            })
            .collect();

        Self { entries, config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Official region names in catalog order.
    pub fn region_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.entry.region.clone()).collect()
    }

    /// Resolve a raw query to a catalog entry.
    ///
    /// Callers are expected to reject empty input beforehand; an input that
    /// normalizes to nothing simply resolves to [`Resolution::NotFound`]
    /// unless a fuzzy threshold admits it.
    pub fn resolve(&self, raw: &str) -> Resolution<'_> {
        let query = normalize(raw);

        for stage in STAGES {
            for candidate in &self.entries {
                if let Some(strategy) = stage
                    .iter()
                    .copied()
                    .find(|strategy| strategy.accepts(&query, candidate, &self.config))
                {
                    debug!(
                        query = %query,
                        region = %candidate.entry.region,
                        strategy = %strategy,
                        "Region matched"
                    );
                    return Resolution::Matched {
                        entry: &candidate.entry,
                        strategy,
                    };
                }
            }
        }

        debug!(query = %query, "No region matched");
        Resolution::NotFound
    }

    /// Whether `raw` identifies the catalog entry for `region` under any
    /// per-entry strategy (exact, alias, substring or fuzzy).
    ///
    /// Returns `false` when `region` is not in the catalog.
    pub fn is_alias_match(&self, raw: &str, region: &str) -> bool {
        let key = normalize(region);
        let Some(candidate) = self.entries.iter().find(|e| e.key == key) else {
            return false;
        };

        let query = normalize(raw);
        let per_entry = STAGES[STAGES.len() - 1];
        per_entry
            .iter()
            .any(|strategy| strategy.accepts(&query, candidate, &self.config))
    }
}
