//! Approval matrix configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Where the approval matrix and the exception list live inside the workbook.
/// All row/column indices are 1-based, spreadsheet style.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatrixConfig {
    /// Sheet holding the discipline grid. Default: "Matriz".
    pub matrix_sheet: Option<String>,
    /// Sheet holding the layer-pair exceptions. Default: "Excecoes".
    pub exception_sheet: Option<String>,
    /// Row with the column-axis discipline names. Default: 2.
    pub header_row: Option<usize>,
    /// First column of the column-axis names. Default: 4.
    pub header_first_column: Option<usize>,
    /// Column with the row-axis discipline names. Default: 2.
    pub header_column: Option<usize>,
    /// First row of the row-axis names. Default: 4.
    pub header_first_row: Option<usize>,
    /// Cell value meaning "ignore this collision". Default: "O".
    pub ignore_marker: Option<String>,
    /// Column of the first layer of an exception row. Default: 2.
    pub exception_layer_a_column: Option<usize>,
    /// Column of the second layer of an exception row. Default: 4.
    pub exception_layer_b_column: Option<usize>,
    /// First data row of the exception sheet. Default: 2.
    pub exception_first_row: Option<usize>,
}

impl MatrixConfig {
    pub fn effective_matrix_sheet(&self) -> &str {
        self.matrix_sheet.as_deref().unwrap_or(constants::DEFAULT_MATRIX_SHEET)
    }

    pub fn effective_exception_sheet(&self) -> &str {
        self.exception_sheet
            .as_deref()
            .unwrap_or(constants::DEFAULT_EXCEPTION_SHEET)
    }

    pub fn effective_header_row(&self) -> usize {
        self.header_row.unwrap_or(constants::DEFAULT_HEADER_ROW)
    }

    pub fn effective_header_first_column(&self) -> usize {
        self.header_first_column
            .unwrap_or(constants::DEFAULT_HEADER_FIRST_COLUMN)
    }

    pub fn effective_header_column(&self) -> usize {
        self.header_column.unwrap_or(constants::DEFAULT_HEADER_COLUMN)
    }

    pub fn effective_header_first_row(&self) -> usize {
        self.header_first_row
            .unwrap_or(constants::DEFAULT_HEADER_FIRST_ROW)
    }

    pub fn effective_ignore_marker(&self) -> &str {
        self.ignore_marker
            .as_deref()
            .unwrap_or(constants::DEFAULT_IGNORE_MARKER)
    }

    pub fn effective_exception_layer_a_column(&self) -> usize {
        self.exception_layer_a_column
            .unwrap_or(constants::DEFAULT_EXCEPTION_LAYER_A_COLUMN)
    }

    pub fn effective_exception_layer_b_column(&self) -> usize {
        self.exception_layer_b_column
            .unwrap_or(constants::DEFAULT_EXCEPTION_LAYER_B_COLUMN)
    }

    pub fn effective_exception_first_row(&self) -> usize {
        self.exception_first_row
            .unwrap_or(constants::DEFAULT_EXCEPTION_FIRST_ROW)
    }
}
