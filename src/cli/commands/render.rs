//! Offline render command.

use std::path::Path;

use console::style;

use crate::assets::AssetCatalog;
use crate::config::Settings;
use crate::server::render_page;

/// Render the page once and write it to a file or stdout.
pub fn cmd_render(settings: &Settings, output: Option<&Path>) -> anyhow::Result<()> {
    let catalog = AssetCatalog::resolve(&settings.assets_dir);
    let html = render_page(&catalog, settings.debug_panel)?;

    match output {
        Some(path) => {
            std::fs::write(path, &html)?;
            eprintln!(
                "{} Wrote {} bytes to {}",
                style("✓").green(),
                html.len(),
                path.display()
            );
        }
        None => print!("{}", html),
    }

    let missing: Vec<_> = catalog.all().into_iter().filter(|a| !a.exists).collect();
    for asset in missing {
        eprintln!(
            "{} Missing asset: {}",
            style("!").yellow(),
            asset.path.display()
        );
    }

    Ok(())
}
