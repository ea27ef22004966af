//! Error types for visualization state generation.

use std::path::PathBuf;
use thiserror::Error;

/// Pipeline errors raised while reconciling or synthesizing a document
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The reconciled intermediate document still holds unresolved required fields.
    #[error("Missing required field values: {}", .missing.join(", "))]
    IncompleteConfiguration { missing: Vec<String> },

    /// The synthesized output document holds unresolved fields although its
    /// input was complete.
    #[error("Required fields are missing values in the generated document: {}", .missing.join(", "))]
    IncompleteSynthesis { missing: Vec<String> },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Failed to serialize document: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while reading and selecting raw config documents
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Document root must be a mapping, found {0}")]
    NotAMapping(String),

    #[error("Visualization '{0}' not found in viz config")]
    VizNotFound(String),

    #[error("Dashboard has no 'dashboard.viz' collection")]
    DashboardVizMissing,

    #[error("Dashboard viz index {index} out of range ({len} entries)")]
    DashboardVizIndex { index: usize, len: usize },
}

/// Top-level application errors (CLI, settings, logging)
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Output(err.to_string())
    }
}
