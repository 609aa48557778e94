//! Startup errors
//!
//! Everything that can fail happens before the frame loop starts.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Car sprite missing or undecodable
    #[error("failed to load sprite {path}: {reason}")]
    AssetLoad { path: PathBuf, reason: String },

    #[error("failed to read settings file {path}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    SettingsParse(#[from] serde_json::Error),
}
