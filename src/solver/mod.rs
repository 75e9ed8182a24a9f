//! Letter solving
//!
//! Finds the dictionary words that can be spelled from a rack of letters.

mod engine;

pub use engine::{Matches, Solver, parse_rack};
