//! Output (ledger, defects, summary) errors.

use std::path::PathBuf;

use super::error_code::{self, ClashErrorCode};

/// Errors writing run outputs. Files written before the failure stay on disk.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Cannot create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read existing ledger {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write summary {path}: {message}")]
    Summary { path: PathBuf, message: String },
}

impl ClashErrorCode for OutputError {
    fn error_code(&self) -> &'static str {
        error_code::OUTPUT_ERROR
    }
}
