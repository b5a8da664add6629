//! Application state shared across handlers.

use std::sync::Arc;

use region_match::RegionMatcher;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Read-only region matcher built once at startup.
    pub matcher: Arc<RegionMatcher>,
    /// Public origin for absolute URLs, without a trailing slash.
    pub public_base_url: Arc<str>,
}

impl AppState {
    /// Create new application state.
    pub fn new(matcher: RegionMatcher, public_base_url: impl Into<String>) -> Self {
        let public_base_url: String = public_base_url.into();
        Self {
            matcher: Arc::new(matcher),
            public_base_url: public_base_url.trim_end_matches('/').into(),
        }
    }
}
