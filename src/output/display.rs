//! Display functions for command results
//!
//! Solve results go to stdout as bare lines so they can be piped; summaries
//! and diagnostics go to stderr.

use crate::commands::{NormalizeResult, SolveResult};
use colored::Colorize;
use std::io::{self, Write};

/// Write matching words, one per line, in dictionary order
///
/// # Errors
///
/// Returns an I/O error if the writer fails.
pub fn write_solve_result<W: Write>(out: &mut W, result: &SolveResult) -> io::Result<()> {
    for word in &result.words {
        writeln!(out, "{word}")?;
    }
    out.flush()
}

/// Print matching words to stdout
///
/// # Errors
///
/// Returns an I/O error if stdout is closed.
pub fn print_solve_result(result: &SolveResult) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_solve_result(&mut out, result)
}

/// Print a one-line summary of a dictionary build to stderr
pub fn print_normalize_result(result: &NormalizeResult) {
    eprintln!(
        "{} {} → {} ({} of {} entries kept)",
        "Built".green().bold(),
        result.source.display(),
        result.destination.display().to_string().bright_yellow(),
        result.kept_count,
        result.raw_count
    );
}

/// Print an error diagnostic to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {message}", "Error:".red().bold());
}
