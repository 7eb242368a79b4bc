//! Exhaustive assignment search.

pub mod optimizer;
pub mod permutation;

pub use optimizer::AssignmentOptimizer;
pub use permutation::permutations;
