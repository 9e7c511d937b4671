//! Configuration system for clashgate.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod aggregation_config;
pub mod clash_config;
pub mod matrix_config;
pub mod output_config;

pub use aggregation_config::{AggregationConfig, AggregationScope};
pub use clash_config::{ClashConfig, CliOverrides};
pub use matrix_config::MatrixConfig;
pub use output_config::OutputConfig;
