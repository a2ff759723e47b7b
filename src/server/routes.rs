//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // The profile page itself
        .route("/", get(handlers::profile_page))
        // Image assets from the configured directory
        .route("/assets/*path", get(handlers::serve_asset))
        // Bundled stylesheet
        .route("/static/style.css", get(handlers::serve_css))
        // Diagnostics
        .route("/api/assets", get(handlers::api_assets))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
