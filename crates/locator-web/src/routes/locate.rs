//! Region lookup routes.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::Json;
use region_match::{CatalogEntry, Resolution, Strategy};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::{LocatorError, Result};
use crate::links::{image_url, MapLinks};
use crate::state::AppState;

/// A located service center.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocateResponse {
    pub region: String,
    pub name: String,
    pub address: String,
    pub products: String,
    pub image_url: String,
    pub map_links: MapLinks,
    pub matched_by: Strategy,
}

impl LocateResponse {
    fn new(entry: &CatalogEntry, strategy: Strategy, public_base_url: &str) -> Self {
        Self {
            region: entry.region.clone(),
            name: entry.name.clone(),
            address: entry.address.clone(),
            products: entry.products.clone(),
            image_url: image_url(public_base_url, &entry.image_file),
            map_links: MapLinks::new(&entry.name, &entry.address),
            matched_by: strategy,
        }
    }
}

/// Locate from a JSON body `{"region": "..."}`.
pub async fn locate_api(State(state): State<AppState>, body: Bytes) -> Result<Json<LocateResponse>> {
    let payload: Value = serde_json::from_slice(&body)
        .map_err(|err| LocatorError::InvalidPayload(format!("body is not valid JSON: {}", err)))?;
    let region = region_field(&payload)?;
    locate(&state, region)
}

/// Locate from the `region` query parameter.
pub async fn locate_query_api(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<LocateResponse>> {
    let region = params
        .get("region")
        .ok_or_else(|| LocatorError::InvalidPayload("missing \"region\" parameter".to_string()))?;
    locate(&state, require_non_blank(region)?)
}

/// Extract a non-blank `region` string from a JSON payload.
fn region_field(payload: &Value) -> Result<&str> {
    let object = payload
        .as_object()
        .ok_or_else(|| LocatorError::InvalidPayload("body must be a JSON object".to_string()))?;

    match object.get("region") {
        None | Some(Value::Null) => Err(LocatorError::InvalidPayload(
            "missing \"region\" field".to_string(),
        )),
        Some(Value::String(region)) => require_non_blank(region),
        Some(_) => Err(LocatorError::InvalidPayload(
            "\"region\" must be a string".to_string(),
        )),
    }
}

fn require_non_blank(region: &str) -> Result<&str> {
    if region.trim().is_empty() {
        return Err(LocatorError::InvalidPayload(
            "\"region\" cannot be empty".to_string(),
        ));
    }
    Ok(region)
}

fn locate(state: &AppState, region: &str) -> Result<Json<LocateResponse>> {
    match state.matcher.resolve(region) {
        Resolution::Matched { entry, strategy } => {
            info!(
                query = %region,
                region = %entry.region,
                strategy = %strategy,
                "Region located"
            );
            Ok(Json(LocateResponse::new(
                entry,
                strategy,
                &state.public_base_url,
            )))
        }
        Resolution::NotFound => {
            info!(query = %region, "Region not found");
            Err(LocatorError::NotFound {
                query: region.to_string(),
                known_regions: state.matcher.region_names(),
            })
        }
    }
}
