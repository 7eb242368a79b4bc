//! Error handling for the roster optimizer.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod roster_error;

pub use config_error::ConfigError;
pub use error_code::RosterErrorCode;
pub use roster_error::RosterError;
