//! The asset-resolution strategy must only decide whether images resolve on
//! a given machine, never what the page says. These tests render the page
//! against differently-located directories and compare output.

use std::path::Path;

use labprofile::assets::AssetCatalog;
use labprofile::config::{AssetLocation, ASSETS_SUBDIR};
use labprofile::content;
use labprofile::server::render_page;
use tempfile::tempdir;

fn populate(dir: &Path) {
    for name in [
        content::BANNER_FILE,
        content::ABOUT_IMAGE_FILE,
        content::DOCKING_IMAGE_FILE,
    ] {
        std::fs::write(dir.join(name), b"fake image bytes").unwrap();
    }
}

#[test]
fn same_contents_different_directories_render_identically() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    populate(a.path());
    populate(b.path());

    let page_a = render_page(&AssetCatalog::resolve(a.path()), false).unwrap();
    let page_b = render_page(&AssetCatalog::resolve(b.path()), false).unwrap();

    // Image URLs are directory-independent, so with every asset resolved the
    // two renders are byte-identical.
    assert_eq!(page_a, page_b);
}

#[test]
fn directory_choice_changes_only_warning_paths() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();

    // Neither directory has any assets: the pages differ only in the
    // expected paths named by the warnings, never in the text content.
    let page_a = render_page(&AssetCatalog::resolve(a.path()), false).unwrap();
    let page_b = render_page(&AssetCatalog::resolve(b.path()), false).unwrap();

    let scrub = |page: &str, dir: &Path| page.replace(&dir.display().to_string(), "<dir>");
    assert_eq!(scrub(&page_a, a.path()), scrub(&page_b, b.path()));

    for page in [&page_a, &page_b] {
        for text in [
            content::ABOUT_HEADING,
            content::THEMES_HEADING,
            content::CONTACT_HEADING,
            content::IN_SILICO_INTRO,
            content::IN_VITRO_OUTRO,
            content::CONTACT_EMAIL,
        ] {
            assert!(page.contains(text));
        }
    }
}

#[test]
fn install_relative_strategy_resolves_under_exe_dir() {
    let dir = AssetLocation::InstallRelative.resolve().unwrap();
    assert!(dir.ends_with(ASSETS_SUBDIR));

    let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();
    assert_eq!(dir, exe_dir.join(ASSETS_SUBDIR));
}

#[test]
fn explicit_strategy_resolves_verbatim() {
    let dir = tempdir().unwrap();
    let resolved = AssetLocation::Directory(dir.path().to_path_buf())
        .resolve()
        .unwrap();
    assert_eq!(resolved, dir.path());
}
