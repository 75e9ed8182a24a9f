//! Available-letter multiset and containment test
//!
//! A word can be spelled from a rack of letters when every character appears in
//! the word no more often than it appears in the rack.

use rustc_hash::FxHashMap;
use std::fmt;

/// Character counts for a rack of available letters
///
/// Absent keys count as zero; stored counts are always positive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterMultiset {
    counts: FxHashMap<char, usize>,
    len: usize,
}

impl LetterMultiset {
    /// Build the multiset from a letter sequence
    ///
    /// The input is taken as-is; normalize it first if the rack may contain
    /// uppercase or accented letters.
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        let mut len = 0;
        for ch in letters.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            len += 1;
        }
        Self { counts, len }
    }

    /// Total number of letters, counting repeats
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

    /// How many copies of `letter` are available
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Check whether `word` can be spelled from these letters
    ///
    /// Scans the word left to right and stops at the first character whose
    /// occurrences so far exceed the copies in the rack. Uses are counted by
    /// looking back over the scanned prefix, so the rack is never copied and
    /// no allocation happens per word. An empty word is always contained.
    ///
    /// Callers filtering many words should reject words longer than
    /// [`len`](Self::len) first; the scan gives the same answer, only slower.
    ///
    /// # Examples
    /// ```
    /// use letter_hoard::core::LetterMultiset;
    ///
    /// let rack = LetterMultiset::from_letters("catalog");
    /// assert!(rack.contains_word("cat"));
    /// assert!(rack.contains_word("goal"));
    /// assert!(!rack.contains_word("cattle"));
    /// ```
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        for (i, ch) in word.char_indices() {
            let used = word[..i].chars().filter(|&c| c == ch).count() + 1;
            if used > self.count(ch) {
                return false;
            }
        }

        true
    }
}

impl fmt::Display for LetterMultiset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters: Vec<(&char, &usize)> = self.counts.iter().collect();
        letters.sort_unstable();

        let mut first = true;
        write!(f, "{{")?;
        for (letter, count) in letters {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{letter}:{count}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

/// Check whether `word` can be spelled using only the letters in `available`
///
/// Each available letter may be used at most as many times as it appears.
/// Neither argument is normalized.
///
/// # Examples
/// ```
/// use letter_hoard::core::is_subset_of;
///
/// assert!(is_subset_of("casa", "aatcos"));
/// assert!(!is_subset_of("gato", "aatcos"));
/// ```
#[must_use]
pub fn is_subset_of(word: &str, available: &str) -> bool {
    LetterMultiset::from_letters(available).contains_word(word)
}
