//! Roster shape and search-input errors.

use super::error_code::{self, RosterErrorCode};

/// Errors raised before any search work starts. None are retried and no
/// partial results are produced.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Manager count {managers} does not match worker count {workers}")]
    HeadcountMismatch { managers: usize, workers: usize },

    #[error("Manager {manager} has {actual} interaction entries, expected {expected}")]
    InteractionLengthMismatch {
        manager: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Roster size {size} exceeds the search maximum {max} (enumeration is factorial)")]
    RosterTooLarge { size: usize, max: usize },

    #[error("Rosters disagree on managers: {message}")]
    ManagerMismatch { message: String },
}

impl RosterErrorCode for RosterError {
    fn error_code(&self) -> &'static str {
        error_code::ROSTER_ERROR
    }
}
