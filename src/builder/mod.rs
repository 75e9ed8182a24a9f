//! Dictionary builder
//!
//! Turns a raw word list into a cleaned, deduplicated, sorted dictionary.

mod pipeline;
pub mod stage;

pub use pipeline::Pipeline;
pub use stage::Stage;

use crate::config::WordLimits;

/// Clean a raw word list with the standard pipeline
///
/// # Examples
/// ```
/// use letter_hoard::builder::build_dictionary;
/// use letter_hoard::config::WordLimits;
///
/// let raw = vec!["Casa".to_string(), "casa".to_string(), "Ção".to_string()];
/// assert_eq!(build_dictionary(raw, WordLimits::default()), vec!["cao", "casa"]);
/// ```
#[must_use]
pub fn build_dictionary(raw: Vec<String>, limits: WordLimits) -> Vec<String> {
    Pipeline::standard(limits).run(raw)
}
