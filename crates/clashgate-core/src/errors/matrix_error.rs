//! Approval matrix errors.

use std::path::PathBuf;

use super::error_code::{self, ClashErrorCode};

/// Errors loading the approval matrix workbook.
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    #[error("Matrix workbook not found: {path}")]
    WorkbookNotFound { path: PathBuf },

    #[error("Sheet '{sheet}' not found in matrix workbook")]
    SheetNotFound { sheet: String },

    #[error("Cannot read sheet {path}: {message}")]
    Unreadable { path: PathBuf, message: String },

    #[error("Sheet '{sheet}' has no discipline names on its {axis} axis")]
    EmptyAxis { sheet: String, axis: &'static str },
}

impl ClashErrorCode for MatrixError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::WorkbookNotFound { .. } => error_code::WORKBOOK_NOT_FOUND,
            Self::SheetNotFound { .. } => error_code::SHEET_NOT_FOUND,
            Self::Unreadable { .. } | Self::EmptyAxis { .. } => error_code::MATRIX_ERROR,
        }
    }
}
