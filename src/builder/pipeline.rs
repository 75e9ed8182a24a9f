//! Ordered stage pipeline for building dictionaries

use super::stage::{
    Dedup, LengthBounds, Lowercase, RejectHyphenated, RejectNumeric, SortCodepoint, Stage,
    StripDiacritics,
};
use crate::config::WordLimits;

/// A sequence of stages applied in order
///
/// Order matters: dedup must follow normalization so entries that collapse to
/// the same form are merged.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline (the identity transform)
    #[must_use]
    pub fn empty() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage
    #[must_use]
    pub fn then<S: Stage + 'static>(mut self, stage: S) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// The dictionary cleaning pipeline
    ///
    /// lowercase → strip diacritics → reject hyphenated → reject numeric →
    /// dedup → length bounds → sort
    #[must_use]
    pub fn standard(limits: WordLimits) -> Self {
        Self::empty()
            .then(Lowercase)
            .then(StripDiacritics)
            .then(RejectHyphenated)
            .then(RejectNumeric)
            .then(Dedup)
            .then(LengthBounds(limits))
            .then(SortCodepoint)
    }

    /// Names of the stages, in order
    #[must_use]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage over the word list
    #[must_use]
    pub fn run(&self, words: Vec<String>) -> Vec<String> {
        self.stages.iter().fold(words, |words, stage| {
            let before = words.len();
            let after = stage.apply(words);
            log::debug!("{:>18}: {before} -> {}", stage.name(), after.len());
            after
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard(WordLimits::default())
    }
}
