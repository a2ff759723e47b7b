//! Asset references and resolution.
//!
//! The page ships with a fixed set of image assets. Each one is resolved
//! against the configured assets directory once per page build and
//! existence-checked before it is rendered. A missing file is never fatal:
//! the renderer substitutes an inline warning naming the expected path and
//! carries on with the rest of the page.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::content;

/// How wide an image is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthPolicy {
    /// Fill the containing column or page.
    Container,
    /// Fixed pixel width.
    Fixed(u32),
}

/// A single image asset, resolved against the assets directory.
#[derive(Debug, Clone)]
pub struct ResolvedAsset {
    /// Bare file name inside the assets directory.
    pub file_name: &'static str,
    /// Full filesystem path the asset is expected at.
    pub path: PathBuf,
    /// Whether the file existed at resolution time.
    pub exists: bool,
    /// Optional caption rendered under the image.
    pub caption: Option<&'static str>,
    /// Display width policy.
    pub width: WidthPolicy,
}

impl ResolvedAsset {
    fn resolve(
        dir: &Path,
        file_name: &'static str,
        caption: Option<&'static str>,
        width: WidthPolicy,
    ) -> Self {
        let path = dir.join(file_name);
        let exists = path.is_file();
        Self {
            file_name,
            path,
            exists,
            caption,
            width,
        }
    }

    /// URL path the asset is served under.
    pub fn url(&self) -> String {
        format!("/assets/{}", self.file_name)
    }
}

/// The fixed set of page assets, resolved in page order.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    /// Directory every asset was resolved against.
    pub dir: PathBuf,
    pub banner: ResolvedAsset,
    pub about_image: ResolvedAsset,
    pub docking_image: ResolvedAsset,
}

impl AssetCatalog {
    /// Resolve all page assets against `dir`, checking existence of each.
    pub fn resolve(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            banner: ResolvedAsset::resolve(dir, content::BANNER_FILE, None, WidthPolicy::Container),
            about_image: ResolvedAsset::resolve(
                dir,
                content::ABOUT_IMAGE_FILE,
                Some(content::ABOUT_IMAGE_CAPTION),
                WidthPolicy::Container,
            ),
            docking_image: ResolvedAsset::resolve(
                dir,
                content::DOCKING_IMAGE_FILE,
                Some(content::DOCKING_IMAGE_CAPTION),
                WidthPolicy::Fixed(content::DOCKING_IMAGE_WIDTH_PX),
            ),
        }
    }

    /// All assets in page order.
    pub fn all(&self) -> [&ResolvedAsset; 3] {
        [&self.banner, &self.about_image, &self.docking_image]
    }

    /// Diagnostic snapshot of the catalog.
    pub fn report(&self) -> AssetReport {
        let dir_exists = self.dir.is_dir();
        // Sorted so the report is stable across renders.
        let mut listing: Vec<String> = std::fs::read_dir(&self.dir)
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        listing.sort();

        AssetReport {
            assets_dir: self.dir.display().to_string(),
            dir_exists,
            listing,
            assets: self
                .all()
                .iter()
                .map(|a| AssetStatus {
                    file_name: a.file_name.to_string(),
                    path: a.path.display().to_string(),
                    exists: a.exists,
                })
                .collect(),
        }
    }
}

/// Existence flag for one asset, as shown in diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct AssetStatus {
    pub file_name: String,
    pub path: String,
    pub exists: bool,
}

/// Diagnostic view of the assets directory and every expected asset.
///
/// Surfaced by the `check` command, the `/api/assets` endpoint, and the
/// optional in-page debug panel.
#[derive(Debug, Clone, Serialize)]
pub struct AssetReport {
    pub assets_dir: String,
    pub dir_exists: bool,
    pub listing: Vec<String>,
    pub assets: Vec<AssetStatus>,
}

impl AssetReport {
    /// True when every expected asset resolved.
    pub fn all_present(&self) -> bool {
        self.assets.iter().all(|a| a.exists)
    }

    /// Placeholder report for pages rendered without diagnostics.
    pub fn empty() -> Self {
        Self {
            assets_dir: String::new(),
            dir_exists: false,
            listing: Vec::new(),
            assets: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"fake image bytes").unwrap();
    }

    #[test]
    fn test_resolve_all_present() {
        let dir = tempdir().unwrap();
        touch(dir.path(), content::BANNER_FILE);
        touch(dir.path(), content::ABOUT_IMAGE_FILE);
        touch(dir.path(), content::DOCKING_IMAGE_FILE);

        let catalog = AssetCatalog::resolve(dir.path());
        assert!(catalog.all().iter().all(|a| a.exists));
        assert!(catalog.report().all_present());
    }

    #[test]
    fn test_resolve_missing_asset_is_flagged() {
        let dir = tempdir().unwrap();
        touch(dir.path(), content::BANNER_FILE);

        let catalog = AssetCatalog::resolve(dir.path());
        assert!(catalog.banner.exists);
        assert!(!catalog.about_image.exists);
        assert!(!catalog.docking_image.exists);

        // The expected path is still reported for missing files.
        assert!(catalog
            .about_image
            .path
            .ends_with(content::ABOUT_IMAGE_FILE));
    }

    #[test]
    fn test_resolve_missing_directory() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("nope");

        let catalog = AssetCatalog::resolve(&gone);
        let report = catalog.report();
        assert!(!report.dir_exists);
        assert!(report.listing.is_empty());
        assert!(report.assets.iter().all(|a| !a.exists));
    }

    #[test]
    fn test_report_listing_is_sorted() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "zz.png");
        touch(dir.path(), "aa.png");

        let report = AssetCatalog::resolve(dir.path()).report();
        assert_eq!(report.listing, vec!["aa.png", "zz.png"]);
    }

    #[test]
    fn test_catalog_page_order() {
        let dir = tempdir().unwrap();
        let catalog = AssetCatalog::resolve(dir.path());
        let names: Vec<&str> = catalog.all().iter().map(|a| a.file_name).collect();
        assert_eq!(
            names,
            vec![
                content::BANNER_FILE,
                content::ABOUT_IMAGE_FILE,
                content::DOCKING_IMAGE_FILE
            ]
        );
    }

    #[test]
    fn test_asset_url() {
        let dir = tempdir().unwrap();
        let catalog = AssetCatalog::resolve(dir.path());
        assert_eq!(catalog.banner.url(), format!("/assets/{}", content::BANNER_FILE));
    }
}
