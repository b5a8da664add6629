//! Service-center catalog.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::aliases::{AliasTable, METROPOLITAN_REGION};
use crate::error::CatalogError;
use crate::normalize::normalize;

/// A service center and the region it serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Official region name; unique across the catalog.
    pub region: String,
    /// Service center name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Products serviced at this center.
    pub products: String,
    /// Image file name, relative to the served image directory.
    pub image_file: String,
}

/// One record of a catalog file: an entry plus optional aliases.
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    #[serde(flatten)]
    entry: CatalogEntry,
    #[serde(default)]
    aliases: Vec<String>,
}

/// Validated, immutable set of catalog entries and their aliases.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    aliases: AliasTable,
}

impl Catalog {
    /// Build a catalog, rejecting empty or colliding region names.
    pub fn new(entries: Vec<CatalogEntry>, aliases: AliasTable) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen: HashMap<String, &str> = HashMap::new();
        for entry in &entries {
            let key = normalize(&entry.region);
            if key.is_empty() {
                return Err(CatalogError::EmptyRegion(entry.region.clone()));
            }
            if let Some(first) = seen.insert(key.clone(), &entry.region) {
                return Err(CatalogError::DuplicateRegion {
                    key,
                    first: first.to_string(),
                    second: entry.region.clone(),
                });
            }
        }

        Ok(Self { entries, aliases })
    }

    /// The compiled-in catalog.
    pub fn builtin() -> Self {
        Self {
            entries: vec![CatalogEntry {
                region: METROPOLITAN_REGION.to_string(),
                name: "SAMTEK".to_string(),
                address: "Av. Providencia 1550, Providencia, Santiago".to_string(),
                products: "Línea blanca, climatización, televisores y audio".to_string(),
                image_file: "samtek.jpg".to_string(),
            }],
            aliases: AliasTable::builtin(),
        }
    }

    /// Parse a catalog from a JSON array of records.
    ///
    /// Each record carries the entry fields in camelCase and an optional
    /// `aliases` array:
    ///
    /// ```json
    /// [{"region": "Valparaíso", "name": "...", "address": "...",
    ///   "products": "...", "imageFile": "valpo.jpg", "aliases": ["Valpo"]}]
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<CatalogRecord> = serde_json::from_str(json)?;

        let mut aliases = AliasTable::new();
        let mut entries = Vec::with_capacity(records.len());
        for record in records {
            if !record.aliases.is_empty() {
                aliases.insert(&record.entry.region, record.aliases);
            }
            entries.push(record.entry);
        }

        Self::new(entries, aliases)
    }

    /// Load a catalog file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            entries = catalog.entries.len(),
            "Loaded region catalog"
        );
        Ok(catalog)
    }

    /// Entries in catalog order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Official region names in catalog order.
    pub fn region_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.region.clone()).collect()
    }
}
