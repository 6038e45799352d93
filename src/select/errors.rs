/// Errors from the column selection layer.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading input and writing selected columns.
#[derive(Debug, Error)]
pub enum SelectError {
    /// The input file could not be opened.
    #[error("Cannot open '{}': {source}", .path.display())]
    FileAccess {
        /// Path as given on the command line.
        path: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },

    /// A line could not be read (I/O failure or invalid UTF-8).
    #[error("Failed to read line {line}: {source}")]
    Read {
        /// 1-based number of the line that failed.
        line: usize,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Standard output could not be written.
    #[error("Failed to write output: {0}")]
    Write(#[from] io::Error),
}

/// Exit code mapping for `SelectError` variants.
impl SelectError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileAccess { .. } | Self::Read { .. } | Self::Write(_) => 1,
        }
    }

    /// Machine-readable error code (snake_case) for the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::FileAccess { .. } => "file_access",
            Self::Read { .. } => "read_failed",
            Self::Write(_) => "write_failed",
        }
    }
}
