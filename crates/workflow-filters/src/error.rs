//! Error types for workflow filter configuration and input parsing.

use thiserror::Error;

/// Errors raised around the derivations: reading config, parsing input.
///
/// The derivations themselves are total and never fail.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Reading a config or input file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input was not valid JSON for the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown name filter mode
    #[error("Invalid name filter '{0}', expected one of: Contains, Prefix, Exact")]
    InvalidNameFilter(String),

    /// Unknown workflow phase
    #[error("Invalid workflow phase: {0}")]
    InvalidPhase(String),

    /// Configuration is structurally valid JSON but unusable
    #[error("Configuration error: {0}")]
    Config(String),
}
