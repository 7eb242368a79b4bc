//! Configuration: search tuning and TOML roster dataset files.
//!
//! Roster data is explicit configuration passed into the optimizer, never
//! module-level literals.

pub mod roster_file;
pub mod search_config;

pub use roster_file::RosterFile;
pub use search_config::SearchConfig;
