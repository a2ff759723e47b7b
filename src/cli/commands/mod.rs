//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific
//! modules.

mod check;
mod render;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_settings_with_options, LoadOptions};

#[derive(Parser)]
#[command(name = "labprofile")]
#[command(about = "Personal research-profile site server")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides labprofile.toml in the working directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Assets directory (overrides config file; default is the `assets`
    /// folder next to the executable)
    #[arg(short, long, global = true, env = "LABPROFILE_ASSETS")]
    assets_dir: Option<PathBuf>,

    /// Render the collapsible asset-diagnostics panel into the page
    #[arg(short, long, global = true)]
    debug: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Bind address: PORT, HOST, or HOST:PORT
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Render the page to a file or stdout without starting a server
    Render {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that every expected asset resolves on this machine
    Check,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
        assets_dir: cli.assets_dir,
        debug_panel: cli.debug,
    };
    let settings = load_settings_with_options(options)?;

    match cli.command {
        Commands::Serve { bind } => serve::cmd_serve(&settings, bind.as_deref()).await,
        Commands::Render { output } => render::cmd_render(&settings, output.as_deref()),
        Commands::Check => check::cmd_check(&settings),
    }
}
