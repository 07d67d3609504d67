//! Optional configuration for filename derivation, loaded from
//! `~/.config/fetchname/config.toml`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading or initializing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config file could not be serialized: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("XDG base directories unavailable: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
}

/// Tunables for filename derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilenameConfig {
    /// Extension appended when the MIME type is absent or unmapped.
    pub default_extension: String,
    /// Base name used when the URL yields no candidate at all.
    pub fallback_basename: String,
    /// Extra MIME-to-extension entries layered over the built-in table.
    #[serde(default)]
    pub extensions: BTreeMap<String, String>,
}

impl Default for FilenameConfig {
    fn default() -> Self {
        Self {
            default_extension: "jpg".to_string(),
            fallback_basename: "download".to_string(),
            extensions: BTreeMap::new(),
        }
    }
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fetchname")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FilenameConfig, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FilenameConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<FilenameConfig, ConfigError> {
    let data = fs::read_to_string(path)?;
    Ok(toml::from_str(&data)?)
}
