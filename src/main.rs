//! Letter Hoard - CLI
//!
//! Builds word-game dictionaries and lists every word a rack of letters can spell.

use anyhow::Result;
use clap::{Parser, Subcommand};
use letter_hoard::{
    commands::{NormalizeConfig, SolveConfig, normalize_dictionary, solve_letters},
    config::{
        DEFAULT_LANGUAGE, DEFAULT_MAX_WORD_LENGTH, DEFAULT_MIN_WORD_LENGTH, DictionaryLayout,
        WordLimits,
    },
    errors::{EXIT_IO, HoardError},
    output::{print_error, print_normalize_result, print_solve_result},
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "letter_hoard",
    about = "Word-game dictionary normalizer and letter solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Root dictionaries directory
    #[arg(short = 'd', long, global = true, default_value = "dicts")]
    dicts_dir: PathBuf,

    /// Raw dictionaries subdirectory, relative to the root
    #[arg(long, global = true, default_value = "raw")]
    raw_subdir: PathBuf,

    /// Shortest word to keep or offer
    #[arg(long, global = true, default_value_t = DEFAULT_MIN_WORD_LENGTH)]
    min_length: usize,

    /// Longest word to keep when building a dictionary
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_WORD_LENGTH)]
    max_length: usize,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build <dicts-dir>/<LANGUAGE> from <dicts-dir>/<raw-subdir>/<LANGUAGE>
    Normalize {
        /// Dictionary file name (e.g. pt-pt)
        language: String,
    },

    /// List every dictionary word the letters can spell
    Solve {
        /// Available letters
        letters: String,

        /// Dictionary language
        #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
        language: String,

        /// Read this dictionary file instead of <dicts-dir>/<language>
        #[arg(long)]
        dictionary: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    letter_hoard::log::init_logger(cli.verbose);

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e.to_string());
            // Anything that is not a HoardError came from writing output
            let code = e
                .downcast_ref::<HoardError>()
                .map_or(EXIT_IO, HoardError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn try_main(cli: Cli) -> Result<()> {
    let limits = WordLimits::new(cli.min_length, cli.max_length)?;
    let layout = DictionaryLayout::new(cli.dicts_dir, cli.raw_subdir);

    match cli.command {
        Commands::Normalize { language } => run_normalize_command(language, layout, limits),
        Commands::Solve {
            letters,
            language,
            dictionary,
        } => run_solve_command(letters, language, dictionary, layout, limits),
    }
}

fn run_normalize_command(
    language: String,
    layout: DictionaryLayout,
    limits: WordLimits,
) -> Result<()> {
    let config = NormalizeConfig {
        language,
        layout,
        limits,
    };

    let result = normalize_dictionary(&config)?;
    print_normalize_result(&result);
    Ok(())
}

fn run_solve_command(
    letters: String,
    language: String,
    dictionary: Option<PathBuf>,
    layout: DictionaryLayout,
    limits: WordLimits,
) -> Result<()> {
    let config = SolveConfig {
        letters,
        language,
        layout,
        dictionary,
        limits,
    };

    let result = solve_letters(&config)?;
    print_solve_result(&result)?;
    Ok(())
}
