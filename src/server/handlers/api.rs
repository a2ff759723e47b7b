//! JSON diagnostics endpoints.

use axum::{extract::State, response::IntoResponse, Json};

use super::super::AppState;
use crate::assets::AssetCatalog;

/// Report the resolved assets directory, its listing, and per-asset
/// existence flags. Purely diagnostic.
pub async fn api_assets(State(state): State<AppState>) -> impl IntoResponse {
    let report = AssetCatalog::resolve(&state.assets_dir).report();
    Json(report)
}
