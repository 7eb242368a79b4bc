//! Search configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for the assignment search.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchConfig {
    /// Score candidates on the rayon pool instead of sequentially.
    /// Default: false. Results are identical either way.
    pub parallel: Option<bool>,
    /// Largest roster the search will accept. Default: 10.
    /// Enumeration is N!; 10 is already ~3.6M candidates.
    pub max_roster_size: Option<usize>,
}

impl SearchConfig {
    /// Returns whether the parallel sweep is enabled, defaulting to false.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }

    /// Returns the effective roster size cap, defaulting to 10.
    pub fn effective_max_roster_size(&self) -> usize {
        self.max_roster_size.unwrap_or(10)
    }
}
