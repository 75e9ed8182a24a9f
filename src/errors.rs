//! Error types shared by the builder and solver
//!
//! Two kinds of failure exist: bad arguments and failed file access. Both are
//! fatal, and each maps to its own process exit code.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit code for I/O failures
pub const EXIT_IO: u8 = 1;

/// Exit code for usage errors
pub const EXIT_USAGE: u8 = 2;

/// Error type for dictionary building and solving
#[derive(Debug)]
pub enum HoardError {
    /// Missing or invalid arguments; no work was performed
    Usage(String),
    /// A dictionary file could not be read or written
    Io { path: PathBuf, source: io::Error },
}

impl HoardError {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => EXIT_USAGE,
            Self::Io { .. } => EXIT_IO,
        }
    }
}

impl fmt::Display for HoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => write!(f, "usage: {msg}"),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for HoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Usage(_) => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}
