//! The assignment optimizer: exhaustive search over all candidate
//! assignments for the performance-maximizing one.

use rayon::prelude::*;
use tracing::{debug, info};

use roster_core::config::SearchConfig;
use roster_core::errors::RosterError;
use roster_core::types::{Assignment, PairedWorker, TeamRoster};

use crate::model::team_performance;

use super::permutation::index_permutations;

/// Exhaustive assignment search over a validated roster.
///
/// Scores every permutation of worker indices (manager `i` paired with
/// worker `P[i]`) and keeps the strictly best-scoring one. Deterministic
/// for a fixed roster and config; the parallel sweep produces identical
/// results to the sequential one.
pub struct AssignmentOptimizer {
    config: SearchConfig,
}

impl AssignmentOptimizer {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Find the assignment maximizing the summed per-pair performance.
    ///
    /// Validates the roster shape first and refuses rosters beyond the
    /// configured size cap (enumeration is N!). The best-so-far sentinel
    /// is 0.0 with a strict comparison: ties keep the first candidate in
    /// enumeration order, NaN scores never win, and a roster where no
    /// candidate beats the sentinel returns the empty assignment.
    pub fn find_best(&self, roster: &TeamRoster) -> Result<Assignment, RosterError> {
        roster.validate()?;

        let size = roster.size();
        let max = self.config.effective_max_roster_size();
        if size > max {
            return Err(RosterError::RosterTooLarge { size, max });
        }

        let candidates = index_permutations(size);
        debug!(roster_size = size, candidates = candidates.len(), "scoring candidates");

        let best = if self.config.effective_parallel() {
            Self::best_parallel(roster, &candidates)
        } else {
            Self::best_sequential(roster, &candidates)
        };

        let assignment = match best {
            Some((index, score)) => {
                info!(score, assignment = ?candidates[index], "search complete");
                Assignment::new(candidates[index].clone())
            }
            None => {
                info!("no candidate beat the zero sentinel; returning empty assignment");
                Assignment::empty()
            }
        };
        Ok(assignment)
    }

    /// Sum of per-pair performances for one candidate: manager `i` with
    /// worker `candidate[i]` and that manager's recorded interaction
    /// score for that worker.
    fn score_candidate(roster: &TeamRoster, candidate: &[usize]) -> f64 {
        candidate
            .iter()
            .enumerate()
            .map(|(manager, &worker)| {
                let profile = &roster.managers[manager];
                let paired =
                    PairedWorker::new(roster.workers[worker], profile.interaction[worker]);
                team_performance(profile.skill, &[paired])
            })
            .sum()
    }

    fn best_sequential(roster: &TeamRoster, candidates: &[Vec<usize>]) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (index, candidate) in candidates.iter().enumerate() {
            let score = Self::score_candidate(roster, candidate);
            if score > best.map_or(0.0, |(_, s)| s) {
                best = Some((index, score));
            }
        }
        best
    }

    /// Max-reduce over independently scored candidates. Equal scores keep
    /// the smaller index, which is exactly the sequential first-found
    /// tie rule.
    fn best_parallel(roster: &TeamRoster, candidates: &[Vec<usize>]) -> Option<(usize, f64)> {
        candidates
            .par_iter()
            .enumerate()
            .map(|(index, candidate)| (index, Self::score_candidate(roster, candidate)))
            .filter(|&(_, score)| score > 0.0)
            .reduce_with(|a, b| {
                if b.1 > a.1 || (b.1 == a.1 && b.0 < a.0) {
                    b
                } else {
                    a
                }
            })
    }
}

impl Default for AssignmentOptimizer {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
