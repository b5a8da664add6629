//! Region name resolution for the service-center locator.
//!
//! Turns free-text region names into canonical keys and matches them
//! against a small static catalog of service centers, tolerating accents,
//! punctuation, abbreviations, partial names and small typos.
//!
//! - [`normalize`] - canonical comparison form of any string
//! - [`distance`] / [`levenshtein`] - edit distance between region strings
//! - [`AliasTable`] - alternate phrasings keyed by canonical region name
//! - [`Catalog`] - validated service-center entries plus their aliases
//! - [`RegionMatcher`] - ordered exact / alias / substring / fuzzy resolution
//!
//! # Example
//!
//! ```rust
//! use region_match::{Catalog, RegionMatcher, Resolution, Strategy};
//!
//! let matcher = RegionMatcher::new(Catalog::builtin());
//!
//! match matcher.resolve("region metropolotana de santiago") {
//!     Resolution::Matched { entry, strategy } => {
//!         assert_eq!(entry.name, "SAMTEK");
//!         assert_eq!(strategy, Strategy::FuzzyKey);
//!     }
//!     Resolution::NotFound => unreachable!(),
//! }
//! ```

mod aliases;
mod catalog;
mod distance;
mod error;
mod matcher;
mod normalize;

pub use aliases::{AliasTable, METROPOLITAN_REGION};
pub use catalog::{Catalog, CatalogEntry};
pub use distance::{distance, levenshtein};
pub use error::CatalogError;
pub use matcher::{
    MatcherConfig, RegionMatcher, Resolution, Strategy, DEFAULT_MAX_EDIT_DISTANCE,
    DEFAULT_MIN_SUBSTRING_LEN,
};
pub use normalize::normalize;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
