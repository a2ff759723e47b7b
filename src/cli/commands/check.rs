//! Asset diagnostics command.

use console::style;

use crate::assets::AssetCatalog;
use crate::config::Settings;

/// Print the same diagnostics the debug panel shows: resolved directory,
/// its listing, and an existence flag per expected asset.
pub fn cmd_check(settings: &Settings) -> anyhow::Result<()> {
    let report = AssetCatalog::resolve(&settings.assets_dir).report();

    let dir_mark = if report.dir_exists {
        style("✓").green()
    } else {
        style("✗").red()
    };
    println!("{} Assets directory: {}", dir_mark, report.assets_dir);

    if !report.listing.is_empty() {
        println!("  Contents:");
        for entry in &report.listing {
            println!("    {}", entry);
        }
    }

    for asset in &report.assets {
        let mark = if asset.exists {
            style("✓").green()
        } else {
            style("✗").red()
        };
        println!("{} {} ({})", mark, asset.file_name, asset.path);
    }

    if report.all_present() {
        println!("{} All assets resolve", style("✓").green());
    } else {
        println!(
            "{} Some assets are missing; the page will render warnings in their place",
            style("!").yellow()
        );
    }

    Ok(())
}
