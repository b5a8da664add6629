//! Alternate phrasings for catalog regions.

use std::collections::HashMap;

use crate::normalize::normalize;

/// Official name of the region served by the built-in catalog.
pub const METROPOLITAN_REGION: &str = "Región Metropolitana de Santiago";

/// Curated phrasings users type for the metropolitan region, misspellings included.
const METROPOLITAN_ALIASES: &[&str] = &[
    "RM",
    "Región Metropolitana",
    "Metropolitana",
    "Metropolitana de Santiago",
    "Santiago",
    "Santiago de Chile",
    "Stgo",
    "Región Metropolitana de Stgo",
    "Santigo",
    "Metropolitna",
    "Region Metropolitan",
];

/// Alias lookup keyed by the canonical form of a region's official name.
///
/// Keys are always derived with [`normalize`], both on insert and on lookup,
/// so callers may pass either the raw region name or its canonical key.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    by_key: HashMap<String, Vec<String>>,
}

impl AliasTable {
    /// Create an empty alias table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias table for the built-in catalog.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.insert(METROPOLITAN_REGION, METROPOLITAN_ALIASES.iter().copied());
        table
    }

    /// Register aliases for a region, appending to any already registered.
    ///
    /// Raw alias text is kept as given; duplicates are skipped.
    pub fn insert<I, S>(&mut self, region: &str, aliases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.by_key.entry(normalize(region)).or_default();
        for alias in aliases {
            let alias = alias.into();
            if !entry.contains(&alias) {
                entry.push(alias);
            }
        }
    }

    /// Aliases registered for a region, in insertion order.
    pub fn aliases_for(&self, region: &str) -> &[String] {
        self.by_key
            .get(&normalize(region))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of regions with registered aliases.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
