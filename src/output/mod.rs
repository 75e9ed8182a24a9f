//! Terminal output formatting

pub mod display;

pub use display::{print_error, print_normalize_result, print_solve_result, write_solve_result};
