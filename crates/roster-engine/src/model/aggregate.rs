//! Aggregation of adjusted scores into a final performance probability.

/// Aggregate manager-adjusted scores into a resultant R0.
///
/// `0.5 + sum / (2·sqrt(sum² + 1))`. The sqrt term dominates the sum, so
/// the result lies in (0,1) for any finite input. An empty slice sums to
/// 0 and yields exactly 0.5 (neutral).
pub fn resultant(xi_stars: &[f64]) -> f64 {
    let sum: f64 = xi_stars.iter().sum();
    0.5 + sum / (2.0 * (sum * sum + 1.0).sqrt())
}

/// Combine the resultant with the manager's own skill.
///
/// `r0·m / (r0·m + (1−r0)·(1−m))`, in [0,1].
///
/// Boundary: 0/0 only when `r0` and `manager_skill` sit at simultaneous
/// opposite extremes; the NaN propagates per the model's boundary policy.
pub fn final_performance(r0: f64, manager_skill: f64) -> f64 {
    let favored = r0 * manager_skill;
    favored / (favored + (1.0 - r0) * (1.0 - manager_skill))
}
