//! Service-center locator web server.
//!
//! Resolves free-text region names to service centers over a small JSON API
//! and serves the static front end and catalog images.

mod config;
mod error;
mod links;
mod routes;
mod state;

use region_match::{Catalog, RegionMatcher};
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting locator web server");

    // Load catalog
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin(),
    };
    info!(
        regions = ?catalog.region_names(),
        min_substring_len = config.matcher.min_substring_len,
        max_edit_distance = config.matcher.max_edit_distance,
        "Region catalog ready"
    );

    // Build application state
    let matcher = RegionMatcher::with_config(catalog, config.matcher);
    let state = AppState::new(matcher, config.public_base_url.clone());

    // Build router
    let app = routes::router()
        .with_state(state)
        .fallback_service(ServeDir::new(&config.static_dir));

    // Start server
    info!(
        addr = %config.addr,
        static_dir = %config.static_dir.display(),
        "Locator web server listening"
    );
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
