//! Locating and loading the configuration file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rh_core::config::Config;

/// Searched in order when no `--config` is given.
pub const DEFAULT_PATHS: &[&str] = &[
    "./reelhub.toml",
    "~/.config/reelhub/config.toml",
    "/etc/reelhub/config.toml",
];

/// Load configuration from a TOML file. Parse errors are fatal here.
pub fn load_config(path: &Path) -> Result<Config> {
    Config::load(path).with_context(|| format!("Failed to load config file: {:?}", path))
}

/// First default location that exists, if any.
pub fn find_default_config() -> Option<PathBuf> {
    DEFAULT_PATHS
        .iter()
        .map(|p| PathBuf::from(shellexpand::tilde(p).as_ref()))
        .find(|p| p.exists())
}

/// Load config from the given path, else the first default location, else
/// built-in defaults. Environment overrides are applied last.
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    let mut config = match custom_path.map(PathBuf::from).or_else(find_default_config) {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            load_config(&path)?
        }
        None => {
            tracing::info!("No config file found; using defaults");
            Config::default()
        }
    };

    config.apply_env();
    Ok(config)
}
