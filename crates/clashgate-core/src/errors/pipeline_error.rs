//! Pipeline errors.

use super::error_code::ClashErrorCode;
use super::{ConfigError, MatrixError, OutputError, ReportError};

/// Fatal errors of a pipeline run. Aggregates subsystem errors via `From`.
///
/// Tolerable problems (defective records, unknown discipline codes, matrix
/// lookup misses) never show up here; they are carried as data.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ClashErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Report(e) => e.error_code(),
            Self::Matrix(e) => e.error_code(),
            Self::Output(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
