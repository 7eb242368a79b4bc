//! Property tests for the model and the search.

use std::collections::HashSet;

use proptest::prelude::*;

use roster_core::config::SearchConfig;
use roster_core::types::{ManagerProfile, PairedWorker, TeamRoster};
use roster_engine::{permutations, team_performance, AssignmentOptimizer};
use roster_engine::model::{pairwise_adjusted, resultant};

/// Probabilities kept away from the degenerate {0,1} boundaries.
fn interior() -> impl Strategy<Value = f64> {
    0.01f64..=0.99
}

proptest! {
    #[test]
    fn pairwise_stays_in_unit_interval(w in interior(), q in interior()) {
        let x = pairwise_adjusted(w, q);
        prop_assert!((0.0..=1.0).contains(&x));
    }

    #[test]
    fn resultant_stays_in_open_unit_interval(xs in prop::collection::vec(-10.0f64..10.0, 0..8)) {
        let r = resultant(&xs);
        prop_assert!(r > 0.0 && r < 1.0);
    }

    #[test]
    fn team_performance_is_order_invariant(
        manager in interior(),
        mut workers in prop::collection::vec((interior(), interior()), 1..6),
    ) {
        let forward: Vec<PairedWorker> =
            workers.iter().map(|&(s, q)| PairedWorker::new(s, q)).collect();
        workers.reverse();
        let reversed: Vec<PairedWorker> =
            workers.iter().map(|&(s, q)| PairedWorker::new(s, q)).collect();

        let a = team_performance(manager, &forward);
        let b = team_performance(manager, &reversed);
        prop_assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn permutation_count_and_bijectivity(n in 0usize..=6) {
        let indices: Vec<usize> = (0..n).collect();
        let all = permutations(&indices);

        let expected: usize = (1..=n).product::<usize>().max(1);
        prop_assert_eq!(all.len(), expected);

        let distinct: HashSet<&Vec<usize>> = all.iter().collect();
        prop_assert_eq!(distinct.len(), all.len());

        for p in &all {
            let used: HashSet<usize> = p.iter().copied().collect();
            prop_assert_eq!(used.len(), n);
        }
    }

    #[test]
    fn search_is_deterministic_and_parallel_agrees(
        workers in prop::collection::vec(interior(), 3),
        skills in prop::collection::vec(interior(), 3),
        interactions in prop::collection::vec(interior(), 9),
    ) {
        let managers: Vec<ManagerProfile> = skills
            .iter()
            .enumerate()
            .map(|(i, &skill)| {
                ManagerProfile::new(skill, interactions[i * 3..(i + 1) * 3].to_vec())
            })
            .collect();
        let roster = TeamRoster::new(workers, managers);

        let sequential = AssignmentOptimizer::default().find_best(&roster).unwrap();
        let again = AssignmentOptimizer::default().find_best(&roster).unwrap();
        prop_assert_eq!(&sequential, &again);

        let parallel = AssignmentOptimizer::new(SearchConfig {
            parallel: Some(true),
            max_roster_size: None,
        })
        .find_best(&roster)
        .unwrap();
        prop_assert_eq!(&sequential, &parallel);
    }
}
