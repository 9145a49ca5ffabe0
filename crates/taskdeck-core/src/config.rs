//! TOML-based application configuration.
//!
//! Stored at `<data_dir>/config.toml`. Holds CLI preferences only; no key
//! here changes classification or scoring semantics.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::store;

/// Data location settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// Override for the snapshot file path. Defaults to
    /// `<data_dir>/snapshot.json` when unset.
    #[serde(default)]
    pub snapshot_file: Option<PathBuf>,
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Colorize urgency labels in list output.
    #[serde(default = "default_true")]
    pub color: bool,
    /// Print the narrative message under the stats summary.
    #[serde(default = "default_true")]
    pub narrative: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            narrative: true,
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Path of the config file inside the data directory.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = store::data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/taskdeck"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load the config, falling back to defaults when the file is missing.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(raw) => toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
            Err(err) => Err(ConfigError::LoadFailed {
                path,
                message: err.to_string(),
            }),
        }
    }

    /// Persist the config.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, raw).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Effective snapshot path: config override or the default location.
    pub fn snapshot_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(ref path) = self.data.snapshot_file {
            return Ok(path.clone());
        }
        store::default_snapshot_path().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/taskdeck"),
            message: e.to_string(),
        })
    }
}
