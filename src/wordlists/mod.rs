//! Dictionary files
//!
//! Reading raw word lists and built dictionaries, and writing built
//! dictionaries back to disk.

pub mod loader;

pub use loader::{load_from_file, load_lines, save_to_file, words_from_lines};
