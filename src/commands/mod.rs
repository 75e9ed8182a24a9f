//! Command implementations

pub mod normalize;
pub mod solve;

pub use normalize::{NormalizeConfig, NormalizeResult, normalize_dictionary};
pub use solve::{SolveConfig, SolveResult, solve_letters};
