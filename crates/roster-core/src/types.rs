//! Core data types for the team-assignment problem.
//!
//! All skill and interaction values are probabilities in [0,1]. Shape is
//! validated (square assignment, full interaction vectors); value ranges
//! are a caller contract and are not sanitized.

use serde::{Deserialize, Serialize};

use crate::errors::RosterError;

/// A manager's individual skill plus one interaction score per worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerProfile {
    /// Individual skill estimate in [0,1].
    pub skill: f64,
    /// Interaction quality with each worker, indexed by worker position.
    pub interaction: Vec<f64>,
}

impl ManagerProfile {
    pub fn new(skill: f64, interaction: Vec<f64>) -> Self {
        Self { skill, interaction }
    }
}

/// The full problem input: worker skills and manager profiles.
///
/// Invariant (checked by [`TeamRoster::validate`]): manager count equals
/// worker count, and every manager carries exactly one interaction score
/// per worker. The assignment problem is square by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRoster {
    /// Individual skill estimate per worker, in [0,1].
    pub workers: Vec<f64>,
    /// One profile per manager slot.
    pub managers: Vec<ManagerProfile>,
}

impl TeamRoster {
    pub fn new(workers: Vec<f64>, managers: Vec<ManagerProfile>) -> Self {
        Self { workers, managers }
    }

    /// Number of manager/worker slots (valid rosters are square).
    pub fn size(&self) -> usize {
        self.managers.len()
    }

    /// Check the square-assignment shape invariant.
    ///
    /// Fails fast on the first violation; no partial recovery.
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.managers.len() != self.workers.len() {
            return Err(RosterError::HeadcountMismatch {
                managers: self.managers.len(),
                workers: self.workers.len(),
            });
        }
        for (index, manager) in self.managers.iter().enumerate() {
            if manager.interaction.len() != self.workers.len() {
                return Err(RosterError::InteractionLengthMismatch {
                    manager: index,
                    expected: self.workers.len(),
                    actual: manager.interaction.len(),
                });
            }
        }
        Ok(())
    }
}

/// One (worker skill, interaction quality) observation as seen by the
/// manager whose team is being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairedWorker {
    pub skill: f64,
    pub interaction: f64,
}

impl PairedWorker {
    pub fn new(skill: f64, interaction: f64) -> Self {
        Self { skill, interaction }
    }
}

/// The optimizer's output: one worker index per manager, forming a
/// permutation of `0..N`.
///
/// The empty assignment is a legitimate result: it means no candidate
/// scored above the zero sentinel (e.g. every candidate degenerated to
/// NaN at a numeric boundary).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Assignment {
    /// `worker_for_manager[i]` is the worker assigned to manager `i`.
    pub worker_for_manager: Vec<usize>,
}

impl Assignment {
    pub fn new(worker_for_manager: Vec<usize>) -> Self {
        Self { worker_for_manager }
    }

    /// The empty assignment (no candidate beat the sentinel).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.worker_for_manager.is_empty()
    }

    pub fn len(&self) -> usize {
        self.worker_for_manager.len()
    }

    /// Worker assigned to the given manager, if any.
    pub fn worker_for(&self, manager: usize) -> Option<usize> {
        self.worker_for_manager.get(manager).copied()
    }
}
