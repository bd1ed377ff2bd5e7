use std::path::PathBuf;
use thiserror::Error;

/// Gazetteer error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    ConfigValidation(String),

    #[error("Failed to parse manifest: {0}")]
    ManifestParse(#[from] serde_json::Error),

    #[error("Invalid package model: {0}")]
    Model(String),

    #[error("Module ({qualname}) MUST have an export list defined")]
    MissingExports { qualname: String },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Gazetteer operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a config validation error
    pub fn config_validation(msg: impl Into<String>) -> Self {
        Error::ConfigValidation(msg.into())
    }

    /// Create a package model error
    pub fn model(msg: impl Into<String>) -> Self {
        Error::Model(msg.into())
    }

    /// Create a missing-export-list error for the given module
    pub fn missing_exports(qualname: impl Into<String>) -> Self {
        Error::MissingExports {
            qualname: qualname.into(),
        }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}
