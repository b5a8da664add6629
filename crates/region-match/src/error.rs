//! Error types for catalog construction.

use thiserror::Error;

/// Errors raised while loading or validating a region catalog.
///
/// Matching itself never fails; a query with no match is reported as
/// [`Resolution::NotFound`](crate::Resolution::NotFound).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog has no entries.
    #[error("catalog has no entries")]
    Empty,

    /// A region name normalizes to nothing.
    #[error("region {0:?} has an empty canonical form")]
    EmptyRegion(String),

    /// Two regions share a canonical key.
    #[error("regions {first:?} and {second:?} both normalize to {key:?}")]
    DuplicateRegion {
        key: String,
        first: String,
        second: String,
    },

    /// Catalog file could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid JSON for the expected shape.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
