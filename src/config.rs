//! Configuration management.
//!
//! Settings come from an optional TOML config file merged with CLI overrides.
//! The one interesting knob is where image assets live: either an explicit
//! directory, or a directory derived from the location of the running
//! executable. Whichever strategy is in effect is resolved exactly once at
//! startup into a plain `PathBuf` that gets passed into the rendering logic;
//! no asset path is ever hard-coded inline.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Subfolder holding bundled images when resolving relative to the binary.
pub const ASSETS_SUBDIR: &str = "assets";

/// Default bind address for `serve`.
pub const DEFAULT_BIND: &str = "127.0.0.1:3030";

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "labprofile.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not locate the running executable: {0}")]
    ExeLocation(std::io::Error),
}

/// Where the assets directory comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLocation {
    /// An explicitly configured directory.
    Directory(PathBuf),
    /// The directory containing the running executable, joined with
    /// [`ASSETS_SUBDIR`].
    InstallRelative,
}

impl AssetLocation {
    /// Resolve the strategy into a concrete directory. Called once at
    /// startup; the result is what rendering sees.
    pub fn resolve(&self) -> Result<PathBuf, ConfigError> {
        match self {
            AssetLocation::Directory(dir) => Ok(dir.clone()),
            AssetLocation::InstallRelative => {
                let exe = std::env::current_exe().map_err(ConfigError::ExeLocation)?;
                let anchor = exe.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
                Ok(anchor.join(ASSETS_SUBDIR))
            }
        }
    }
}

/// On-disk config file shape. Every field is optional; CLI flags win.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Explicit assets directory.
    pub assets_dir: Option<PathBuf>,
    /// Bind address for the web server (`PORT`, `HOST`, or `HOST:PORT`).
    pub bind: Option<String>,
    /// Render the collapsible diagnostics panel into the page.
    pub debug_panel: Option<bool>,
}

impl ConfigFile {
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Inputs gathered by the CLI before settings are built.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path; when unset, [`CONFIG_FILE_NAME`] in the
    /// working directory is used if present.
    pub config_path: Option<PathBuf>,
    /// `--assets-dir` override.
    pub assets_dir: Option<PathBuf>,
    /// `--debug` override.
    pub debug_panel: bool,
}

/// Resolved runtime settings, built once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory all image assets are resolved against.
    pub assets_dir: PathBuf,
    /// Bind address for `serve` unless overridden on the command line.
    pub bind: String,
    /// Whether the page carries the diagnostics panel.
    pub debug_panel: bool,
}

/// Build [`Settings`] from the config file (if any) and CLI overrides.
///
/// Precedence per field: CLI flag, then config file, then default. The
/// asset-location strategy defaults to install-relative when nothing names a
/// directory explicitly.
pub fn load_settings_with_options(options: LoadOptions) -> Result<Settings, ConfigError> {
    let file = match &options.config_path {
        Some(path) => ConfigFile::load(path)?,
        None => {
            let default = PathBuf::from(CONFIG_FILE_NAME);
            if default.is_file() {
                ConfigFile::load(&default)?
            } else {
                ConfigFile::default()
            }
        }
    };

    let location = options
        .assets_dir
        .or(file.assets_dir)
        .map(AssetLocation::Directory)
        .unwrap_or(AssetLocation::InstallRelative);

    Ok(Settings {
        assets_dir: location.resolve()?,
        bind: file.bind.unwrap_or_else(|| DEFAULT_BIND.to_string()),
        debug_panel: options.debug_panel || file.debug_panel.unwrap_or(false),
    })
}
