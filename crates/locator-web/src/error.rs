//! Error types for the locator web interface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors returned by locator handlers.
#[derive(Debug, Error)]
pub enum LocatorError {
    /// Request did not carry a usable region string.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// No catalog entry matched the query.
    #[error("region not found: {query}")]
    NotFound {
        query: String,
        known_regions: Vec<String>,
    },
}

impl IntoResponse for LocatorError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            LocatorError::InvalidPayload(detail) => {
                tracing::warn!(detail = %detail, "Rejected locate request");
                (
                    StatusCode::BAD_REQUEST,
                    serde_json::json!({
                        "error": "invalid payload",
                        "detail": detail,
                    }),
                )
            }
            LocatorError::NotFound {
                query,
                known_regions,
            } => (
                StatusCode::NOT_FOUND,
                serde_json::json!({
                    "error": "region not found",
                    "query": query,
                    "knownRegions": known_regions,
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for locator handlers.
pub type Result<T> = std::result::Result<T, LocatorError>;
