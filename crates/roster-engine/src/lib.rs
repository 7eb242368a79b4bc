//! roster-engine — the team performance model and the assignment search.
//!
//! The model is a set of pure functions over probabilities in [0,1]; the
//! search exhaustively enumerates worker-to-manager assignments and keeps
//! the best-scoring one. Nothing here touches I/O or shared state.

pub mod combine;
pub mod model;
pub mod search;

pub use combine::cross_roster_teams;
pub use model::team_performance;
pub use search::{permutations, AssignmentOptimizer};
