//! Error types for the fluidctl CLI
//!
//! Each subsystem has its own error enum; [`FluidctlError`] wraps them so
//! handlers can propagate any of them with `?`.

use crate::analyzer::dataset_health::{FixtureError, MapperError, StoreError};
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for CLI operations
#[derive(Debug, Error)]
pub enum FluidctlError {
    /// Discovery of the dataset's resources failed
    #[error(transparent)]
    Mapper(#[from] MapperError),

    /// Connecting to the cluster failed
    #[error("Failed to connect to cluster: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// No mock scenario with this name exists
    #[error("Unknown scenario '{name}' (available: {available})")]
    ScenarioNotFound { name: String, available: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors raised while loading `.fluidctl.toml`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    ParsingFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, FluidctlError>;
