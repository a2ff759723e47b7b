//! Static asset constants.

/// Stylesheet for the profile page.
pub const CSS: &str = include_str!("styles.css");
