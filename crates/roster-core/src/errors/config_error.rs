//! Configuration and dataset-file errors.

use super::error_code::{self, RosterErrorCode};

/// Errors raised while loading roster datasets or search configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid configuration for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl RosterErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
