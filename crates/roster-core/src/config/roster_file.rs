//! TOML roster dataset files.
//!
//! Format:
//!
//! ```toml
//! name = "lawyers"
//! workers = [0.75, 0.41, 0.53, 0.87]
//!
//! [[managers]]
//! skill = 0.58
//! interaction = [0.8, 0.3, 0.2, 0.5]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::{ManagerProfile, TeamRoster};

/// Serde model for one roster dataset file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFile {
    /// Human-readable dataset name, used in reports.
    pub name: String,
    /// Worker skill values in [0,1].
    pub workers: Vec<f64>,
    /// One entry per manager slot.
    pub managers: Vec<ManagerEntry>,
}

/// One `[[managers]]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerEntry {
    pub skill: f64,
    pub interaction: Vec<f64>,
}

impl RosterFile {
    /// Read and parse a roster dataset from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&raw).map_err(|e| match e {
            ConfigError::ParseError { message, .. } => ConfigError::ParseError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Parse a roster dataset from a TOML string.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::ParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Convert into the engine's input type. Shape validation is the
    /// optimizer's job; this is a plain re-shaping.
    pub fn into_roster(self) -> TeamRoster {
        TeamRoster::new(
            self.workers,
            self.managers
                .into_iter()
                .map(|m| ManagerProfile::new(m.skill, m.interaction))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
name = "sample"
workers = [0.75, 0.41]

[[managers]]
skill = 0.58
interaction = [0.8, 0.3]

[[managers]]
skill = 0.82
interaction = [0.9, 0.6]
"#;

    #[test]
    fn test_parse_sample() {
        let file = RosterFile::from_toml(SAMPLE).unwrap();
        assert_eq!(file.name, "sample");
        assert_eq!(file.workers.len(), 2);
        assert_eq!(file.managers.len(), 2);
        assert_eq!(file.managers[1].interaction, vec![0.9, 0.6]);
    }

    #[test]
    fn test_into_roster() {
        let roster = RosterFile::from_toml(SAMPLE).unwrap().into_roster();
        assert!(roster.validate().is_ok());
        assert_eq!(roster.size(), 2);
        assert_eq!(roster.managers[0].skill, 0.58);
    }

    #[test]
    fn test_parse_error() {
        let err = RosterFile::from_toml("workers = \"not a list\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
