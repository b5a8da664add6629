//! Read-only region listing.

use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// List the official names of all configured regions.
pub async fn regions_api(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.matcher.region_names())
}
