//! Configuration System
//!
//! Application settings for the `visgen` tool: logging and output rendering.
//! Settings are layered (defaults, global file, workspace files, environment) and
//! validated after loading. These are tool settings only; the dashboard and
//! visualization documents being merged are inputs, see [`crate::raw`].

use crate::error::AppError;
use crate::logging::LoggingConfig;
use crate::render::RenderOptions;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisgenConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Rendering defaults for generated documents
    #[serde(default)]
    pub output: OutputConfig,
}

/// Rendering defaults; CLI flags override them per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Indent JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Order keys alphabetically instead of document order
    #[serde(default)]
    pub sort_keys: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_true(),
            sort_keys: false,
        }
    }
}

impl From<&OutputConfig> for RenderOptions {
    fn from(output: &OutputConfig) -> Self {
        RenderOptions {
            pretty: output.pretty,
            sort_keys: output.sort_keys,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl VisgenConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate, folding every problem into one configuration error.
    pub fn validated(self) -> Result<Self, AppError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            AppError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(self)
    }
}
