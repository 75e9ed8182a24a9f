//! Dictionary normalization command
//!
//! Reads a raw word list, cleans it, and writes the built dictionary.

use crate::builder::build_dictionary;
use crate::config::{DictionaryLayout, WordLimits};
use crate::errors::HoardError;
use crate::wordlists::{load_lines, save_to_file};
use std::path::PathBuf;

/// Configuration for building a dictionary
pub struct NormalizeConfig {
    pub language: String,
    pub layout: DictionaryLayout,
    pub limits: WordLimits,
}

impl NormalizeConfig {
    #[must_use]
    pub fn new(language: String) -> Self {
        Self {
            language,
            layout: DictionaryLayout::default(),
            limits: WordLimits::default(),
        }
    }
}

/// Result of building a dictionary
pub struct NormalizeResult {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub raw_count: usize,
    pub kept_count: usize,
}

/// Build the dictionary for `config.language`
///
/// # Errors
///
/// Returns a usage error for an empty language name, and `HoardError::Io`
/// if the raw list cannot be read or the dictionary cannot be written.
pub fn normalize_dictionary(config: &NormalizeConfig) -> Result<NormalizeResult, HoardError> {
    if config.language.trim().is_empty() {
        return Err(HoardError::Usage("dictionary name required".to_string()));
    }

    let source = config.layout.raw_path(&config.language);
    let destination = config.layout.processed_path(&config.language);

    let raw = load_lines(&source)?;
    let raw_count = raw.len();

    let words = build_dictionary(raw, config.limits);
    save_to_file(&destination, &words)?;

    Ok(NormalizeResult {
        source,
        destination,
        raw_count,
        kept_count: words.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn config_in(root: &std::path::Path, language: &str) -> NormalizeConfig {
        let mut config = NormalizeConfig::new(language.to_string());
        config.layout = DictionaryLayout::new(root, "raw");
        config
    }

    #[test]
    fn normalize_writes_processed_dictionary() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("raw")).unwrap();
        fs::write(
            dir.path().join("raw").join("pt-pt"),
            "Casa\ncasa\nÇão\nab\ntoolongwordexceedingten\ncafé-com-leite\ngato2\n",
        )
        .unwrap();

        let result = normalize_dictionary(&config_in(dir.path(), "pt-pt")).unwrap();

        assert_eq!(result.raw_count, 7);
        assert_eq!(result.kept_count, 2);
        assert_eq!(result.destination, dir.path().join("pt-pt"));
        assert_eq!(fs::read_to_string(&result.destination).unwrap(), "cao\ncasa\n");
    }

    #[test]
    fn normalize_missing_source_is_io_error() {
        let dir = tempdir().unwrap();

        let result = normalize_dictionary(&config_in(dir.path(), "xx"));
        assert!(matches!(result, Err(HoardError::Io { .. })));
        assert!(!dir.path().join("xx").exists());
    }

    #[test]
    fn normalize_empty_language_is_usage_error() {
        let dir = tempdir().unwrap();

        let result = normalize_dictionary(&config_in(dir.path(), " "));
        assert!(matches!(result, Err(HoardError::Usage(_))));
    }

    #[test]
    fn normalize_respects_custom_limits() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("raw")).unwrap();
        fs::write(dir.path().join("raw").join("en"), "ox\ncat\nhorse\n").unwrap();

        let mut config = config_in(dir.path(), "en");
        config.limits = WordLimits::new(2, 3).unwrap();

        let result = normalize_dictionary(&config).unwrap();
        assert_eq!(result.kept_count, 2);
        assert_eq!(fs::read_to_string(dir.path().join("en")).unwrap(), "cat\nox\n");
    }
}
