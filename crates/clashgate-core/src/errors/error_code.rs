//! ClashErrorCode trait for the user-facing failure line.

/// Every error enum implements this to provide a stable code string
/// that front ends print alongside the message.
pub trait ClashErrorCode {
    /// Returns the error code string (e.g., "MATRIX_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted display string: `[ERROR_CODE] message`.
    fn display_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const REPORT_NOT_FOUND: &str = "REPORT_NOT_FOUND";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
pub const WORKBOOK_NOT_FOUND: &str = "WORKBOOK_NOT_FOUND";
pub const SHEET_NOT_FOUND: &str = "SHEET_NOT_FOUND";
pub const MATRIX_ERROR: &str = "MATRIX_ERROR";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
