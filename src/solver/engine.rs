//! Main letter solver interface

use crate::config::WordLimits;
use crate::core::{LetterMultiset, Word, normalize};
use crate::errors::HoardError;

/// Words that can be spelled from a rack, with scan statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matches<'a> {
    /// Matching dictionary words, in dictionary order
    pub words: Vec<&'a Word>,
    /// Dictionary words examined
    pub considered: usize,
    /// Words that passed the length checks and were scanned letter by letter
    pub scanned: usize,
}

/// Normalize raw letters into a rack and check there are enough of them
///
/// # Errors
///
/// Returns `HoardError::Usage` if the letters normalize to nothing, or to
/// fewer letters than `limits.min`.
pub fn parse_rack(raw_letters: &str, limits: WordLimits) -> Result<LetterMultiset, HoardError> {
    let letters = normalize(raw_letters);

    if letters.is_empty() {
        return Err(HoardError::Usage("no letters given".to_string()));
    }

    let rack = LetterMultiset::from_letters(&letters);
    if rack.len() < limits.min {
        return Err(HoardError::Usage(format!(
            "at least {} letters required, got {}",
            limits.min,
            rack.len()
        )));
    }

    Ok(rack)
}

/// Letter solver over a loaded dictionary
///
/// The dictionary is borrowed, never modified, and may be unnormalized;
/// every entry is matched by its normalized form.
pub struct Solver<'a> {
    dictionary: &'a [Word],
    limits: WordLimits,
}

impl<'a> Solver<'a> {
    /// Create a solver over a dictionary
    ///
    /// Only `limits.min` is used: words shorter than it are never offered.
    /// The upper bound on candidates is the number of available letters.
    pub const fn new(dictionary: &'a [Word], limits: WordLimits) -> Self {
        Self { dictionary, limits }
    }

    /// Normalize and validate raw letters into a rack
    ///
    /// # Errors
    ///
    /// See [`parse_rack`].
    pub fn rack(&self, raw_letters: &str) -> Result<LetterMultiset, HoardError> {
        parse_rack(raw_letters, self.limits)
    }

    /// Find every dictionary word that can be spelled from the rack
    ///
    /// Words shorter than the minimum length or longer than the rack are
    /// skipped before the letter scan. Dictionary order is preserved.
    pub fn find_matches(&self, rack: &LetterMultiset) -> Matches<'a> {
        let mut words = Vec::new();
        let mut scanned = 0;

        for word in self.dictionary {
            if word.len() < self.limits.min || word.len() > rack.len() {
                continue;
            }

            scanned += 1;
            if rack.contains_word(word.normalized()) {
                words.push(word);
            }
        }

        Matches {
            words,
            considered: self.dictionary.len(),
            scanned,
        }
    }

    /// Validate the letters and return every matching word
    ///
    /// # Errors
    ///
    /// Returns `HoardError::Usage` if the letters are invalid (see [`Self::rack`]).
    ///
    /// # Examples
    /// ```
    /// use letter_hoard::config::WordLimits;
    /// use letter_hoard::solver::Solver;
    /// use letter_hoard::wordlists::words_from_lines;
    ///
    /// let dictionary = words_from_lines(["gato", "casa", "ato", "caos", "sac"]);
    /// let solver = Solver::new(&dictionary, WordLimits::default());
    ///
    /// let found: Vec<&str> = solver.solve("aatcos").unwrap().iter().map(|w| w.text()).collect();
    /// assert_eq!(found, ["casa", "ato", "caos", "sac"]);
    /// ```
    pub fn solve(&self, raw_letters: &str) -> Result<Vec<&'a Word>, HoardError> {
        let rack = self.rack(raw_letters)?;
        log::debug!("Rack: {rack}");

        let matches = self.find_matches(&rack);
        log::debug!(
            "Scanned {} of {} words, {} matched",
            matches.scanned,
            matches.considered,
            matches.words.len()
        );

        Ok(matches.words)
    }
}
