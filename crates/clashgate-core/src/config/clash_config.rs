//! Top-level clashgate configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AggregationConfig, AggregationScope, MatrixConfig, OutputConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CLASHGATE_*`)
/// 3. Project config (`clashgate.toml` in the project root)
/// 4. User config (`~/.clashgate/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClashConfig {
    pub matrix: MatrixConfig,
    pub output: OutputConfig,
    pub aggregation: AggregationConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub matrix_sheet: Option<String>,
    pub exception_sheet: Option<String>,
    pub aggregation_scope: Option<AggregationScope>,
    pub resume_ledgers: Option<bool>,
}

impl ClashConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(constants::PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ClashConfig) -> Result<(), ConfigError> {
        let indices = [
            ("matrix.header_row", config.matrix.header_row),
            ("matrix.header_first_column", config.matrix.header_first_column),
            ("matrix.header_column", config.matrix.header_column),
            ("matrix.header_first_row", config.matrix.header_first_row),
            ("matrix.exception_layer_a_column", config.matrix.exception_layer_a_column),
            ("matrix.exception_layer_b_column", config.matrix.exception_layer_b_column),
            ("matrix.exception_first_row", config.matrix.exception_first_row),
        ];
        for (field, value) in indices {
            if value == Some(0) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "indices are 1-based and must be at least 1".to_string(),
                });
            }
        }

        let names = [
            ("matrix.matrix_sheet", &config.matrix.matrix_sheet),
            ("matrix.exception_sheet", &config.matrix.exception_sheet),
            ("matrix.ignore_marker", &config.matrix.ignore_marker),
            ("output.defects_file", &config.output.defects_file),
            ("output.summary_file", &config.output.summary_file),
        ];
        for (field, value) in names {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.clashgate/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ClashConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ClashConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut ClashConfig, other: &ClashConfig) {
        fn take<T: Clone>(base: &mut Option<T>, other: &Option<T>) {
            if other.is_some() {
                base.clone_from(other);
            }
        }

        // Matrix
        take(&mut base.matrix.matrix_sheet, &other.matrix.matrix_sheet);
        take(&mut base.matrix.exception_sheet, &other.matrix.exception_sheet);
        take(&mut base.matrix.header_row, &other.matrix.header_row);
        take(&mut base.matrix.header_first_column, &other.matrix.header_first_column);
        take(&mut base.matrix.header_column, &other.matrix.header_column);
        take(&mut base.matrix.header_first_row, &other.matrix.header_first_row);
        take(&mut base.matrix.ignore_marker, &other.matrix.ignore_marker);
        take(
            &mut base.matrix.exception_layer_a_column,
            &other.matrix.exception_layer_a_column,
        );
        take(
            &mut base.matrix.exception_layer_b_column,
            &other.matrix.exception_layer_b_column,
        );
        take(&mut base.matrix.exception_first_row, &other.matrix.exception_first_row);

        // Output
        take(&mut base.output.defects_file, &other.output.defects_file);
        take(&mut base.output.summary_file, &other.output.summary_file);
        take(&mut base.output.resume_ledgers, &other.output.resume_ledgers);

        // Aggregation
        take(&mut base.aggregation.scope, &other.aggregation.scope);
        take(
            &mut base.aggregation.include_empty_groups,
            &other.aggregation.include_empty_groups,
        );
    }

    /// Apply environment variable overrides.
    /// Pattern: `CLASHGATE_MATRIX_SHEET`, `CLASHGATE_AGGREGATION_SCOPE`, etc.
    fn apply_env_overrides(config: &mut ClashConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("CLASHGATE_MATRIX_SHEET") {
            config.matrix.matrix_sheet = Some(val);
        }
        if let Ok(val) = std::env::var("CLASHGATE_EXCEPTION_SHEET") {
            config.matrix.exception_sheet = Some(val);
        }
        if let Ok(val) = std::env::var("CLASHGATE_IGNORE_MARKER") {
            config.matrix.ignore_marker = Some(val);
        }
        if let Ok(val) = std::env::var("CLASHGATE_AGGREGATION_SCOPE") {
            let scope = val
                .parse::<AggregationScope>()
                .map_err(|message| ConfigError::InvalidValue {
                    field: "CLASHGATE_AGGREGATION_SCOPE".to_string(),
                    message,
                })?;
            config.aggregation.scope = Some(scope);
        }
        if let Ok(val) = std::env::var("CLASHGATE_RESUME_LEDGERS") {
            let resume = val
                .parse::<bool>()
                .map_err(|e| ConfigError::InvalidValue {
                    field: "CLASHGATE_RESUME_LEDGERS".to_string(),
                    message: e.to_string(),
                })?;
            config.output.resume_ledgers = Some(resume);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ClashConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.matrix_sheet {
            config.matrix.matrix_sheet = Some(v.clone());
        }
        if let Some(ref v) = cli.exception_sheet {
            config.matrix.exception_sheet = Some(v.clone());
        }
        if let Some(v) = cli.aggregation_scope {
            config.aggregation.scope = Some(v);
        }
        if let Some(v) = cli.resume_ledgers {
            config.output.resume_ledgers = Some(v);
        }
    }

    /// Returns a copy with every tunable filled in with its effective value.
    pub fn resolved(&self) -> ClashConfig {
        let m = &self.matrix;
        let o = &self.output;
        let a = &self.aggregation;
        ClashConfig {
            matrix: MatrixConfig {
                matrix_sheet: Some(m.effective_matrix_sheet().to_string()),
                exception_sheet: Some(m.effective_exception_sheet().to_string()),
                header_row: Some(m.effective_header_row()),
                header_first_column: Some(m.effective_header_first_column()),
                header_column: Some(m.effective_header_column()),
                header_first_row: Some(m.effective_header_first_row()),
                ignore_marker: Some(m.effective_ignore_marker().to_string()),
                exception_layer_a_column: Some(m.effective_exception_layer_a_column()),
                exception_layer_b_column: Some(m.effective_exception_layer_b_column()),
                exception_first_row: Some(m.effective_exception_first_row()),
            },
            output: OutputConfig {
                defects_file: Some(o.effective_defects_file().to_string()),
                summary_file: Some(o.effective_summary_file().to_string()),
                resume_ledgers: Some(o.effective_resume_ledgers()),
            },
            aggregation: AggregationConfig {
                scope: Some(a.effective_scope()),
                include_empty_groups: Some(a.effective_include_empty_groups()),
            },
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level config directory: `~/.clashgate/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".clashgate"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
