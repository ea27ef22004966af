//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{AppError, GenerateError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &AppError) -> String {
    match e {
        AppError::Generate(GenerateError::IncompleteConfiguration { .. }) => {
            format!("Configuration incomplete: {}", e)
        }
        AppError::Generate(GenerateError::IncompleteSynthesis { .. }) => {
            format!("Internal error while building the document: {}", e)
        }
        _ => e.to_string(),
    }
}
