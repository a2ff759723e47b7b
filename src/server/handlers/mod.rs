//! HTTP request handlers for the web server.

mod api;
mod profile;
mod static_files;

// Re-export handlers for use by the router
pub use api::api_assets;
pub use profile::profile_page;
pub use static_files::{serve_asset, serve_css};
