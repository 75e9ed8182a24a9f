//! Core domain types for letter matching
//!
//! This module contains the normalization rules and the multiset containment
//! test. Everything here is pure and free of I/O.

mod letters;
mod normalize;
mod word;

pub use letters::{LetterMultiset, is_subset_of};
pub use normalize::{char_len, normalize, strip_diacritics};
pub use word::Word;
