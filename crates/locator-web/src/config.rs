//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use region_match::{MatcherConfig, DEFAULT_MAX_EDIT_DISTANCE, DEFAULT_MIN_SUBSTRING_LEN};

/// Locator web server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Public origin used to build absolute image URLs.
    pub public_base_url: String,
    /// Directory of static files, images under `images/`.
    pub static_dir: PathBuf,
    /// Catalog JSON file; the built-in catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    /// Matching thresholds.
    pub matcher: MatcherConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `LOCATOR_ADDR` | Server bind address | `127.0.0.1:8790` |
    /// | `PUBLIC_BASE_URL` | Origin for absolute image URLs | `http://<LOCATOR_ADDR>` |
    /// | `STATIC_DIR` | Static file directory | `static` |
    /// | `CATALOG_PATH` | Catalog JSON file | (built-in catalog) |
    /// | `REGION_MIN_SUBSTRING_LEN` | Minimum query length for substring matches | `6` |
    /// | `REGION_MAX_EDIT_DISTANCE` | Largest accepted edit distance | `2` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr: SocketAddr = lookup("LOCATOR_ADDR")
            .unwrap_or_else(|| "127.0.0.1:8790".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let public_base_url = lookup("PUBLIC_BASE_URL")
            .unwrap_or_else(|| format!("http://{}", addr))
            .trim_end_matches('/')
            .to_string();

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("static"));

        let catalog_path = lookup("CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let min_substring_len =
            parse_usize(&lookup, "REGION_MIN_SUBSTRING_LEN", DEFAULT_MIN_SUBSTRING_LEN)?;
        let max_edit_distance =
            parse_usize(&lookup, "REGION_MAX_EDIT_DISTANCE", DEFAULT_MAX_EDIT_DISTANCE)?;

        Ok(Self {
            addr,
            public_base_url,
            static_dir,
            catalog_path,
            matcher: MatcherConfig {
                min_substring_len,
                max_edit_distance,
            },
        })
    }
}

fn parse_usize<F>(lookup: &F, var: &'static str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
        None => Ok(default),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid LOCATOR_ADDR format")]
    InvalidAddr,

    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}
