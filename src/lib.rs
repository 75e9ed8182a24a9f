//! Letter Hoard
//!
//! Builds clean word-game dictionaries and finds every word that can be spelled
//! from a rack of letters.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_hoard::config::WordLimits;
//! use letter_hoard::core::{is_subset_of, normalize};
//! use letter_hoard::solver::Solver;
//! use letter_hoard::wordlists::words_from_lines;
//!
//! assert_eq!(normalize("AÇÃO"), "acao");
//! assert!(is_subset_of("cat", "catalog"));
//!
//! let dictionary = words_from_lines(["gato", "casa", "ato"]);
//! let solver = Solver::new(&dictionary, WordLimits::default());
//! assert_eq!(solver.solve("aatcos").unwrap().len(), 2);
//! ```

// Core domain types
pub mod core;

// Dictionary cleaning pipeline
pub mod builder;

// Letter solving
pub mod solver;

// Dictionary files
pub mod wordlists;

// Command implementations
pub mod commands;

// Runtime configuration and errors
pub mod config;
pub mod errors;

// Logging setup
pub mod log;

// Terminal output formatting
pub mod output;
