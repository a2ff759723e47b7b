//! labprofile - personal research-profile site server.
//!
//! Renders a single static profile page (banner, biography, research themes,
//! contact block) from fixed text content and a small set of local image
//! assets, and serves it over HTTP. A missing image degrades to an inline
//! warning naming the expected path; the page itself always renders.

pub mod assets;
pub mod cli;
pub mod config;
pub mod content;
pub mod server;
