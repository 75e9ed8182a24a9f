//! Dictionary cleaning stages
//!
//! Each stage is a pure transform from one word list to the next. Stages are
//! independent so every rule can be tested on its own.

use crate::config::WordLimits;
use crate::core::{char_len, strip_diacritics};
use rustc_hash::FxHashSet;

/// A single transform in the dictionary builder
pub trait Stage {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Transform the word list
    fn apply(&self, words: Vec<String>) -> Vec<String>;
}

/// Lowercase every entry
pub struct Lowercase;

impl Stage for Lowercase {
    fn name(&self) -> &'static str {
        "lowercase"
    }

    fn apply(&self, words: Vec<String>) -> Vec<String> {
        words.into_iter().map(|w| w.to_lowercase()).collect()
    }
}

/// Remove diacritics from every entry
pub struct StripDiacritics;

impl Stage for StripDiacritics {
    fn name(&self) -> &'static str {
        "strip-diacritics"
    }

    fn apply(&self, words: Vec<String>) -> Vec<String> {
        words.into_iter().map(|w| strip_diacritics(&w)).collect()
    }
}

/// Drop entries containing a hyphen
pub struct RejectHyphenated;

impl Stage for RejectHyphenated {
    fn name(&self) -> &'static str {
        "reject-hyphenated"
    }

    fn apply(&self, words: Vec<String>) -> Vec<String> {
        words.into_iter().filter(|w| !w.contains('-')).collect()
    }
}

/// Drop entries containing any numeric character
pub struct RejectNumeric;

impl Stage for RejectNumeric {
    fn name(&self) -> &'static str {
        "reject-numeric"
    }

    fn apply(&self, words: Vec<String>) -> Vec<String> {
        words
            .into_iter()
            .filter(|w| !w.chars().any(char::is_numeric))
            .collect()
    }
}

/// Keep the first occurrence of each entry
pub struct Dedup;

impl Stage for Dedup {
    fn name(&self) -> &'static str {
        "dedup"
    }

    fn apply(&self, words: Vec<String>) -> Vec<String> {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        words
            .into_iter()
            .filter(|w| seen.insert(w.clone()))
            .collect()
    }
}

/// Keep entries whose length is within the configured bounds
pub struct LengthBounds(pub WordLimits);

impl Stage for LengthBounds {
    fn name(&self) -> &'static str {
        "length-bounds"
    }

    fn apply(&self, words: Vec<String>) -> Vec<String> {
        words
            .into_iter()
            .filter(|w| self.0.accepts(char_len(w)))
            .collect()
    }
}

/// Sort by codepoint order (not locale collation)
pub struct SortCodepoint;

impl Stage for SortCodepoint {
    fn name(&self) -> &'static str {
        "sort"
    }

    fn apply(&self, mut words: Vec<String>) -> Vec<String> {
        // UTF-8 byte order is codepoint order
        words.sort_unstable();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn lowercase_stage() {
        let out = Lowercase.apply(strings(&["Casa", "ÇÃO", "gato"]));
        assert_eq!(out, strings(&["casa", "ção", "gato"]));
    }

    #[test]
    fn strip_diacritics_stage_keeps_case() {
        let out = StripDiacritics.apply(strings(&["ação", "Éter", "pão-de-ló"]));
        assert_eq!(out, strings(&["acao", "Eter", "pao-de-lo"]));
    }

    #[test]
    fn reject_hyphenated_stage() {
        let out = RejectHyphenated.apply(strings(&["cafe-com-leite", "casa", "-", "guarda-chuva"]));
        assert_eq!(out, strings(&["casa"]));
    }

    #[test]
    fn reject_numeric_stage() {
        let out = RejectNumeric.apply(strings(&["gato2", "casa", "4x4", "½bolo"]));
        assert_eq!(out, strings(&["casa"]));
    }

    #[test]
    fn dedup_keeps_first_seen_order() {
        let out = Dedup.apply(strings(&["casa", "gato", "casa", "ato", "gato"]));
        assert_eq!(out, strings(&["casa", "gato", "ato"]));
    }

    #[test]
    fn length_bounds_inclusive() {
        let stage = LengthBounds(WordLimits::default());
        let out = stage.apply(strings(&["ab", "abc", "abcdefghij", "abcdefghijk", ""]));
        assert_eq!(out, strings(&["abc", "abcdefghij"]));
    }

    #[test]
    fn length_bounds_counts_characters() {
        let stage = LengthBounds(WordLimits { min: 3, max: 3 });
        let out = stage.apply(strings(&["ção", "cao", "caos"]));
        assert_eq!(out, strings(&["ção", "cao"]));
    }

    #[test]
    fn sort_is_codepoint_order() {
        let out = SortCodepoint.apply(strings(&["casa", "Zebra", "ábaco", "abaco"]));
        assert_eq!(out, strings(&["Zebra", "abaco", "casa", "ábaco"]));
    }

    #[test]
    fn stages_have_names() {
        let stages: Vec<Box<dyn Stage>> = vec![
            Box::new(Lowercase),
            Box::new(StripDiacritics),
            Box::new(RejectHyphenated),
            Box::new(RejectNumeric),
            Box::new(Dedup),
            Box::new(LengthBounds(WordLimits::default())),
            Box::new(SortCodepoint),
        ];
        let names: FxHashSet<&str> = stages.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), stages.len());
    }
}
