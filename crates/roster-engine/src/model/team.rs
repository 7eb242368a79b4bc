//! Whole-team performance for one manager.

use roster_core::types::PairedWorker;

use super::adjusted::{manager_adjusted, pairwise_adjusted};
use super::aggregate::{final_performance, resultant};

/// Expected performance of `workers` under a manager of the given skill.
///
/// Runs the full adjustment pipeline per worker, aggregates, and folds in
/// the manager's own skill. The aggregation is a sum, so the result is
/// invariant under reordering of `workers`. An empty team degenerates to
/// the manager-only estimate (neutral resultant 0.5).
pub fn team_performance(manager_skill: f64, workers: &[PairedWorker]) -> f64 {
    let xi_stars: Vec<f64> = workers
        .iter()
        .map(|w| manager_adjusted(pairwise_adjusted(w.skill, w.interaction), manager_skill))
        .collect();
    final_performance(resultant(&xi_stars), manager_skill)
}
