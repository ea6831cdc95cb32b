//! Error types for Recurse Invaders

use std::path::PathBuf;
use thiserror::Error;

/// Startup failures. Every variant is fatal; nothing is raised once the
/// game loop is running.
#[derive(Debug, Error)]
pub enum InvadersError {
    #[error("Video subsystem could not initialize: {0}")]
    VideoInit(String),

    #[error("Window or renderer creation failed: {0}")]
    WindowCreation(String),

    #[error("Couldn't load {}: {message}", path.display())]
    AssetLoad { path: PathBuf, message: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl InvadersError {
    /// Build an asset error from a path and any displayable diagnostic
    pub fn asset_load(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        InvadersError::AssetLoad {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for Recurse Invaders operations
pub type Result<T> = std::result::Result<T, InvadersError>;

impl From<toml::de::Error> for InvadersError {
    fn from(err: toml::de::Error) -> Self {
        InvadersError::Config(err.to_string())
    }
}
