//! Reporters: renderings of a [`RunSummary`] for the terminal or for tools.

pub mod console;
pub mod json;

use crate::pipeline::RunSummary;

/// Trait for run summary rendering.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, summary: &RunSummary) -> Result<String, String>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "text" | "console" => Some(Box::new(console::ConsoleReporter::default())),
        "json" => Some(Box::new(json::JsonReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["text", "json"]
}
