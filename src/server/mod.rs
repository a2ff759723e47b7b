//! Web server for the research-profile page.
//!
//! Serves the rendered page, the image assets it references, the bundled
//! stylesheet, and a JSON diagnostics endpoint. Each page view is one
//! stateless render pass; nothing is shared between requests beyond
//! read-only access to the assets directory.

mod assets;
mod handlers;
mod routes;
mod template_structs;

pub use routes::create_router;
pub use template_structs::{render_page, ProfileTemplate};

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::config::Settings;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    /// Directory image assets are resolved against, fixed at startup.
    pub assets_dir: PathBuf,
    /// Whether pages carry the diagnostics panel.
    pub debug_panel: bool,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            assets_dir: settings.assets_dir.clone(),
            debug_panel: settings.debug_panel,
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
