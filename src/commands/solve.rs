//! Letter solving command
//!
//! Loads a built dictionary and finds every word the given letters can spell.

use crate::config::{DEFAULT_LANGUAGE, DictionaryLayout, WordLimits};
use crate::errors::HoardError;
use crate::solver::{Solver, parse_rack};
use crate::wordlists::load_from_file;
use std::path::PathBuf;

/// Configuration for a solve run
pub struct SolveConfig {
    pub letters: String,
    pub language: String,
    pub layout: DictionaryLayout,
    /// Explicit dictionary file; overrides the layout path when set
    pub dictionary: Option<PathBuf>,
    pub limits: WordLimits,
}

impl SolveConfig {
    #[must_use]
    pub fn new(letters: String) -> Self {
        Self {
            letters,
            language: DEFAULT_LANGUAGE.to_string(),
            layout: DictionaryLayout::default(),
            dictionary: None,
            limits: WordLimits::default(),
        }
    }

    /// The dictionary file this run reads
    #[must_use]
    pub fn dictionary_path(&self) -> PathBuf {
        self.dictionary
            .clone()
            .unwrap_or_else(|| self.layout.processed_path(&self.language))
    }
}

/// Result of a solve run
#[derive(Debug)]
pub struct SolveResult {
    pub letters: String,
    pub dictionary_size: usize,
    /// Matching words as they appear in the dictionary, in dictionary order
    pub words: Vec<String>,
}

/// Solve for the configured letters
///
/// Letters are validated before the dictionary is read, so a usage error
/// never touches the filesystem.
///
/// # Errors
///
/// Returns `HoardError::Usage` for missing or too few letters, and
/// `HoardError::Io` if the dictionary cannot be read.
pub fn solve_letters(config: &SolveConfig) -> Result<SolveResult, HoardError> {
    let rack = parse_rack(&config.letters, config.limits)?;
    log::debug!("Rack: {rack}");

    let dictionary = load_from_file(config.dictionary_path())?;
    let matches = Solver::new(&dictionary, config.limits).find_matches(&rack);
    log::info!(
        "{} of {} words match ({} scanned)",
        matches.words.len(),
        matches.considered,
        matches.scanned
    );

    Ok(SolveResult {
        letters: config.letters.clone(),
        dictionary_size: dictionary.len(),
        words: matches.words.iter().map(|w| w.text().to_string()).collect(),
    })
}
