//! Error types for scanning and output.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Fatal errors. Any of these aborts the whole scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The traversal root exists but is not a directory.
    #[error("root path is not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    /// A directory listing could not be opened or read.
    #[error("cannot read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An entry could not be stat'ed.
    #[error("cannot stat {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Generic I/O error with path context.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output destination could not be removed, created or opened.
    #[error("cannot open output {}: {source}", .path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a row (or flushing) failed.
    #[error("failed to write output: {0}")]
    Output(#[from] csv::Error),
}

impl ScanError {
    pub fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }

    pub fn stat(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Stat {
            path: path.into(),
            source,
        }
    }
}
