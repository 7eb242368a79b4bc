//! roster-core — shared types, errors, and configuration.
//!
//! No algorithms live here. The performance model and the assignment
//! search are in `roster-engine`; this crate only defines the data they
//! operate on and the error taxonomy they surface.

pub mod config;
pub mod errors;
pub mod types;

pub use config::{RosterFile, SearchConfig};
pub use errors::{ConfigError, RosterError, RosterErrorCode};
pub use types::{Assignment, ManagerProfile, PairedWorker, TeamRoster};
