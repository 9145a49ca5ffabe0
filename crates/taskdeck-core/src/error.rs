//! Error types for taskdeck-core.
//!
//! The pure dashboard engine (classify/filter/stats) never errors on data
//! quality; it degrades to neutral defaults. Errors exist only at the store
//! and config edges.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for taskdeck-core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Snapshot-store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read snapshot at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write snapshot at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Snapshot at {path} is not valid JSON: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Project '{0}' is archived; tasks cannot be added to it")]
    ProjectArchived(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Could not determine a home directory for the data path")]
    HomeDirUnavailable,
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError.
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
