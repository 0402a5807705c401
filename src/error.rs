use std::path::PathBuf;

use thiserror::Error;

use crate::config::ValidationError;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Required surface '{slot}' not found in view for panel '{panel}'")]
    MissingSurface { panel: String, slot: String },

    #[error("Failed to load view {path:?}: {reason}")]
    ViewLoad { path: PathBuf, reason: String },

    #[error("Unknown generator: {0}")]
    UnknownGenerator(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
