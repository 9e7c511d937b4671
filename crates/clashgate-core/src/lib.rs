//! # clashgate-core
//!
//! Foundation crate for the clashgate clash-report engine.
//! Defines errors, config, tracing setup, shared constants and collection types.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::ClashConfig;
pub use errors::error_code::ClashErrorCode;
pub use types::collections::{FxHashMap, FxHashSet};
