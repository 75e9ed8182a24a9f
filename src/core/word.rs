//! Dictionary word representation
//!
//! A Word keeps the entry as it appeared in the dictionary alongside its
//! normalized matching form.

use super::normalize::{char_len, normalize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A dictionary entry with its precomputed normalized form
///
/// Equality and hashing use the normalized form only, so "Casa" and "casa"
/// are the same word.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    normalized: String,
    len: usize,
}

impl Word {
    /// Create a Word from a dictionary entry
    ///
    /// Surrounding whitespace is trimmed from the stored text. Normalization
    /// never fails; an entry with no letters has an empty normalized form.
    ///
    /// # Examples
    /// ```
    /// use letter_hoard::core::Word;
    ///
    /// let word = Word::new(" Ação ");
    /// assert_eq!(word.text(), "Ação");
    /// assert_eq!(word.normalized(), "acao");
    /// assert_eq!(word.len(), 4);
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        let raw: String = text.into();
        let text = raw.trim().to_string();
        let normalized = normalize(&text);
        let len = char_len(&normalized);

        Self {
            text,
            normalized,
            len,
        }
    }

    /// The entry as it appeared in the dictionary (trimmed)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercase, diacritic-free, letters-only form
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Length of the normalized form in characters
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
