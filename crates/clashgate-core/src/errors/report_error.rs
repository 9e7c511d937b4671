//! Clash report input errors.

use std::path::PathBuf;

use super::error_code::{self, ClashErrorCode};

/// Errors reading the textual clash report. All of them are fatal to a run;
/// malformed blocks inside a readable report are not errors.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Clash report not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Cannot read clash report {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClashErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::REPORT_NOT_FOUND,
            Self::Unreadable { .. } => error_code::REPORT_ERROR,
        }
    }
}
