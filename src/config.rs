//! Runtime configuration for the builder and solver
//!
//! Word length bounds and the dictionary directory layout are plain values
//! passed into the entry points, so tests and other languages can use their
//! own settings.

use crate::errors::HoardError;
use std::path::{Path, PathBuf};

/// Language used when none is given
pub const DEFAULT_LANGUAGE: &str = "pt-pt";

/// Shortest word kept in a dictionary or offered as a solution
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// Longest word kept in a built dictionary
pub const DEFAULT_MAX_WORD_LENGTH: usize = 10;

/// Inclusive word length bounds, in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordLimits {
    pub min: usize,
    pub max: usize,
}

impl WordLimits {
    /// Create length bounds
    ///
    /// # Errors
    ///
    /// Returns a usage error if `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, HoardError> {
        if min > max {
            return Err(HoardError::Usage(format!(
                "minimum word length {min} exceeds maximum {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Check whether a length falls within the bounds
    #[inline]
    #[must_use]
    pub const fn accepts(&self, len: usize) -> bool {
        len >= self.min && len <= self.max
    }
}

impl Default for WordLimits {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_WORD_LENGTH,
            max: DEFAULT_MAX_WORD_LENGTH,
        }
    }
}

/// Where raw and processed dictionaries live
///
/// Raw lists are read from `<root>/<raw_subdir>/<language>` and processed
/// dictionaries are written to `<root>/<language>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryLayout {
    pub root: PathBuf,
    pub raw_subdir: PathBuf,
}

impl DictionaryLayout {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, raw_subdir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            raw_subdir: raw_subdir.into(),
        }
    }

    /// Path of the unprocessed word list for a language
    #[must_use]
    pub fn raw_path(&self, language: &str) -> PathBuf {
        self.root.join(&self.raw_subdir).join(language)
    }

    /// Path of the built dictionary for a language
    #[must_use]
    pub fn processed_path(&self, language: &str) -> PathBuf {
        self.root.join(language)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for DictionaryLayout {
    fn default() -> Self {
        Self::new("dicts", "raw")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits() {
        let limits = WordLimits::default();
        assert_eq!(limits.min, 3);
        assert_eq!(limits.max, 10);
    }

    #[test]
    fn limits_accept_inclusive_range() {
        let limits = WordLimits::default();
        assert!(!limits.accepts(2));
        assert!(limits.accepts(3));
        assert!(limits.accepts(10));
        assert!(!limits.accepts(11));
    }

    #[test]
    fn inverted_limits_rejected() {
        assert!(matches!(WordLimits::new(5, 4), Err(HoardError::Usage(_))));
        assert!(WordLimits::new(4, 4).is_ok());
    }

    #[test]
    fn layout_paths() {
        let layout = DictionaryLayout::default();
        assert_eq!(layout.raw_path("pt-pt"), PathBuf::from("dicts/raw/pt-pt"));
        assert_eq!(layout.processed_path("pt-pt"), PathBuf::from("dicts/pt-pt"));
    }

    #[test]
    fn layout_new_matches_default() {
        assert_eq!(DictionaryLayout::new("dicts", "raw"), DictionaryLayout::default());
    }

    #[test]
    fn layout_custom_root() {
        let layout = DictionaryLayout::new("/tmp/words", "source");
        assert_eq!(layout.raw_path("en"), PathBuf::from("/tmp/words/source/en"));
        assert_eq!(layout.processed_path("en"), PathBuf::from("/tmp/words/en"));
        assert_eq!(layout.root(), Path::new("/tmp/words"));
    }
}
