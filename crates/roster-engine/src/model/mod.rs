//! Team performance model — pure functions, no state.
//!
//! Pipeline per manager: each worker's skill is adjusted for interaction
//! quality ([`pairwise_adjusted`]), then for the manager's own skill
//! ([`manager_adjusted`]); the adjusted scores aggregate into a resultant
//! ([`resultant`]) which combines with manager skill into the final
//! performance probability ([`final_performance`]).
//!
//! Numeric boundary policy: inputs sitting exactly at {0,1} extremes can
//! force division by zero. The model propagates the resulting IEEE
//! NaN/infinity to the caller; it never substitutes a finite stand-in.

pub mod adjusted;
pub mod aggregate;
pub mod team;

pub use adjusted::{manager_adjusted, pairwise_adjusted};
pub use aggregate::{final_performance, resultant};
pub use team::team_performance;
