//! Cross-roster team composition.
//!
//! When several discipline rosters share the same manager slate, each
//! manager's actual team is the worker assigned to them in every roster.
//! This module evaluates that composed team per manager.

use roster_core::errors::RosterError;
use roster_core::types::{Assignment, PairedWorker, TeamRoster};

use crate::model::team_performance;

/// Evaluate each manager's composed cross-roster team.
///
/// `solved` pairs every discipline roster with the assignment found for
/// it. All rosters must agree on manager count and skills (the slate is
/// shared); disagreement is [`RosterError::ManagerMismatch`]. A roster
/// whose assignment is empty contributes no worker to any team.
///
/// Returns one performance value per manager, in slate order.
pub fn cross_roster_teams(solved: &[(TeamRoster, Assignment)]) -> Result<Vec<f64>, RosterError> {
    let Some((reference, _)) = solved.first() else {
        return Ok(Vec::new());
    };

    for (roster, _) in &solved[1..] {
        if roster.managers.len() != reference.managers.len() {
            return Err(RosterError::ManagerMismatch {
                message: format!(
                    "expected {} managers, found {}",
                    reference.managers.len(),
                    roster.managers.len()
                ),
            });
        }
        for (index, (a, b)) in reference.managers.iter().zip(&roster.managers).enumerate() {
            if a.skill != b.skill {
                return Err(RosterError::ManagerMismatch {
                    message: format!(
                        "manager {index} skill differs: {} vs {}",
                        a.skill, b.skill
                    ),
                });
            }
        }
    }

    let performances = reference
        .managers
        .iter()
        .enumerate()
        .map(|(manager, profile)| {
            let team: Vec<PairedWorker> = solved
                .iter()
                .filter_map(|(roster, assignment)| {
                    assignment.worker_for(manager).map(|worker| {
                        PairedWorker::new(
                            roster.workers[worker],
                            roster.managers[manager].interaction[worker],
                        )
                    })
                })
                .collect();
            team_performance(profile.skill, &team)
        })
        .collect();

    Ok(performances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::types::ManagerProfile;

    fn roster(skills: [f64; 2], workers: [f64; 2]) -> TeamRoster {
        TeamRoster::new(
            workers.to_vec(),
            vec![
                ManagerProfile::new(skills[0], vec![0.6, 0.4]),
                ManagerProfile::new(skills[1], vec![0.3, 0.7]),
            ],
        )
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(cross_roster_teams(&[]).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn test_composes_one_worker_per_roster() {
        let a = roster([0.58, 0.82], [0.75, 0.41]);
        let b = roster([0.58, 0.82], [0.65, 0.29]);
        let solved = vec![
            (a.clone(), Assignment::new(vec![0, 1])),
            (b.clone(), Assignment::new(vec![1, 0])),
        ];
        let perf = cross_roster_teams(&solved).unwrap();
        assert_eq!(perf.len(), 2);

        let expected_first = team_performance(
            0.58,
            &[PairedWorker::new(0.75, 0.6), PairedWorker::new(0.29, 0.4)],
        );
        assert!((perf[0] - expected_first).abs() < 1e-12);
    }

    #[test]
    fn test_empty_assignment_contributes_nothing() {
        let a = roster([0.58, 0.82], [0.75, 0.41]);
        let b = roster([0.58, 0.82], [0.65, 0.29]);
        let solved = vec![
            (a, Assignment::new(vec![0, 1])),
            (b, Assignment::empty()),
        ];
        let perf = cross_roster_teams(&solved).unwrap();
        let expected_first = team_performance(0.58, &[PairedWorker::new(0.75, 0.6)]);
        assert!((perf[0] - expected_first).abs() < 1e-12);
    }

    #[test]
    fn test_skill_disagreement_rejected() {
        let a = roster([0.58, 0.82], [0.75, 0.41]);
        let b = roster([0.58, 0.80], [0.65, 0.29]);
        let solved = vec![
            (a, Assignment::new(vec![0, 1])),
            (b, Assignment::new(vec![0, 1])),
        ];
        assert!(matches!(
            cross_roster_teams(&solved),
            Err(RosterError::ManagerMismatch { .. })
        ));
    }
}
