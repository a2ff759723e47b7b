//! Profile page handler.

use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use super::super::template_structs::render_page;
use super::super::AppState;
use crate::assets::AssetCatalog;

/// Render the profile page.
///
/// Assets are re-resolved on every request; each render is stateless, so
/// identical directory contents always produce identical bytes.
pub async fn profile_page(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = AssetCatalog::resolve(&state.assets_dir);
    Html(render_page(&catalog, state.debug_panel).unwrap_or_else(|e| {
        tracing::error!("template render failed: {}", e);
        format!("Template error: {}", e)
    }))
}
