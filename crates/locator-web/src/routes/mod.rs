//! Route handlers for the locator web interface.

pub mod health;
pub mod locate;
pub mod regions;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // API endpoints
        .route("/api/regions", get(regions::regions_api))
        .route(
            "/api/locate",
            get(locate::locate_query_api).post(locate::locate_api),
        )
}
