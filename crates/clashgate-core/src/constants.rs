//! Shared constants for the clashgate engine.

/// Cell value in the approval matrix meaning "expected collision, do not report".
pub const DEFAULT_IGNORE_MARKER: &str = "O";

/// Sheet holding the discipline approval matrix.
pub const DEFAULT_MATRIX_SHEET: &str = "Matriz";

/// Sheet holding the layer-pair exception list.
pub const DEFAULT_EXCEPTION_SHEET: &str = "Excecoes";

/// 1-based row holding the column-axis discipline names.
pub const DEFAULT_HEADER_ROW: usize = 2;

/// 1-based column where the column-axis discipline names start.
pub const DEFAULT_HEADER_FIRST_COLUMN: usize = 4;

/// 1-based column holding the row-axis discipline names.
pub const DEFAULT_HEADER_COLUMN: usize = 2;

/// 1-based row where the row-axis discipline names start.
pub const DEFAULT_HEADER_FIRST_ROW: usize = 4;

/// 1-based column of the first layer in an exception row `(_, layer_a, _, layer_b)`.
pub const DEFAULT_EXCEPTION_LAYER_A_COLUMN: usize = 2;

/// 1-based column of the second layer in an exception row.
pub const DEFAULT_EXCEPTION_LAYER_B_COLUMN: usize = 4;

/// 1-based row of the first exception entry (row 1 is a title row).
pub const DEFAULT_EXCEPTION_FIRST_ROW: usize = 2;

/// Defects ledger file name.
pub const DEFAULT_DEFECTS_FILE: &str = "defects.txt";

/// Conflict summary file name.
pub const DEFAULT_SUMMARY_FILE: &str = "conflict_summary.csv";

/// Sentinel stored in a layer slot when the item block carried no `Layer:` line.
pub const EMPTY_LAYER: &str = "<empty layer>";

/// Placeholder printed in the defects ledger for missing values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Width of the dashed rule closing every ledger block.
pub const LEDGER_RULE_WIDTH: usize = 40;

/// Minimum run of '-' that counts as a record separator in the input report.
pub const MIN_SEPARATOR_LEN: usize = 5;

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "clashgate.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "CLASHGATE_LOG";
