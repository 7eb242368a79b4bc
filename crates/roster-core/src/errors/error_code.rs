//! Stable error codes for machine-readable surfaces (reports, exit paths).

/// Trait implemented by every subsystem error enum.
pub trait RosterErrorCode {
    /// Stable string code for this error. Never changes across releases.
    fn error_code(&self) -> &'static str;
}

pub const ROSTER_ERROR: &str = "ROSTER_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
