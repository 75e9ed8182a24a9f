//! Word list loading and saving
//!
//! Dictionaries are plain UTF-8 text with one word per line.

use crate::core::Word;
use crate::errors::HoardError;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Read every line of a raw word list
///
/// Surrounding whitespace, including `\r` from CRLF files, is trimmed. Blank
/// lines come back as empty strings for the builder to filter.
///
/// # Errors
///
/// Returns `HoardError::Io` if the file cannot be opened or is not valid UTF-8.
pub fn load_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, HoardError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| HoardError::io(path, e))?;

    let lines: Vec<String> = content.lines().map(|l| l.trim().to_string()).collect();
    log::debug!("Read {} raw lines from {}", lines.len(), path.display());

    Ok(lines)
}

/// Load a dictionary for solving
///
/// Blank lines are skipped; every other line becomes a [`Word`] in file order.
///
/// # Errors
///
/// Returns `HoardError::Io` if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use letter_hoard::wordlists::loader::load_from_file;
///
/// let words = load_from_file("dicts/pt-pt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, HoardError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| HoardError::io(path, e))?;

    let words = words_from_lines(content.lines());
    log::info!("Loaded {} words from {}", words.len(), path.display());

    Ok(words)
}

/// Convert lines to Word values, skipping blank ones
///
/// # Examples
/// ```
/// use letter_hoard::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines(["casa", "", "gato"]);
/// assert_eq!(words.len(), 2);
/// ```
pub fn words_from_lines<'a, I>(lines: I) -> Vec<Word>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .map(Word::new)
        .collect()
}

/// Write a word list, one word per line, LF-terminated
///
/// The list is written to a temporary file next to `path` and renamed into
/// place once complete, so readers never see a partial dictionary. Missing
/// parent directories are created.
///
/// # Errors
///
/// Returns `HoardError::Io` if the directory or file cannot be created or
/// written.
pub fn save_to_file<P: AsRef<Path>>(path: P, words: &[String]) -> Result<(), HoardError> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| HoardError::io(parent, e))?;

    let temp_file = NamedTempFile::new_in(parent).map_err(|e| HoardError::io(parent, e))?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        for word in words {
            writeln!(writer, "{word}").map_err(|e| HoardError::io(path, e))?;
        }
        writer.flush().map_err(|e| HoardError::io(path, e))?;
    }

    temp_file
        .persist(path)
        .map_err(|e| HoardError::io(path, e.error))?;

    log::info!("Wrote {} words to {}", words.len(), path.display());
    Ok(())
}
