//! Error handling for clashgate.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod matrix_error;
pub mod output_error;
pub mod pipeline_error;
pub mod report_error;

pub use config_error::ConfigError;
pub use error_code::ClashErrorCode;
pub use matrix_error::MatrixError;
pub use output_error::OutputError;
pub use pipeline_error::PipelineError;
pub use report_error::ReportError;
