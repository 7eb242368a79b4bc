//! Per-worker skill adjustment.

/// Adjust a worker's skill for interaction quality with the manager.
///
/// `up / (up + interaction·(1 − skill))` where `up = skill·(1 − interaction)`.
/// Result is in [0,1] whenever the denominator is nonzero.
///
/// Boundary: the denominator vanishes only at degenerate {0,1} input
/// extremes (e.g. skill 0 with interaction 0); the resulting NaN
/// propagates per the model's boundary policy.
pub fn pairwise_adjusted(worker_skill: f64, interaction: f64) -> f64 {
    let up = worker_skill * (1.0 - interaction);
    let down = up + interaction * (1.0 - worker_skill);
    up / down
}

/// Adjust an interaction-adjusted score for the manager's own skill.
///
/// `sign(x − 0.5) · 0.5 · sqrt(A + 1/A − 2)` with
/// `A = x·(1−m) / (m·(1−x))`; sign is +1 when `x ≥ 0.5`.
///
/// `A + 1/A − 2 ≥ 0` holds analytically for A > 0 (AM-GM), but float
/// roundoff can dip slightly below zero, so the value is floored at 0
/// before the square root. NaN short-circuits first: `f64::max(NaN, 0.0)`
/// would return 0.0 and mask the boundary.
///
/// Boundary: degenerate at `manager_skill ∈ {0,1}` or `xi_mark ∈ {0,1}`
/// (division by zero); NaN/infinity propagates.
pub fn manager_adjusted(xi_mark: f64, manager_skill: f64) -> f64 {
    let ratio = (xi_mark * (1.0 - manager_skill)) / (manager_skill * (1.0 - xi_mark));
    let excess = ratio + 1.0 / ratio - 2.0;
    if excess.is_nan() {
        return f64::NAN;
    }
    let half_root = 0.5 * excess.max(0.0).sqrt();
    if xi_mark >= 0.5 {
        half_root
    } else {
        -half_root
    }
}
