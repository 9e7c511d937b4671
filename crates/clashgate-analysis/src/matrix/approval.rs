//! Discipline-pair approval matrix.

use clashgate_core::config::MatrixConfig;
use clashgate_core::errors::MatrixError;
use clashgate_core::types::collections::FxHashMap;

use super::exceptions::ExceptionList;
use super::grid::{Grid, GridSource};
use super::verdict::Verdict;
use crate::model::ClashRecord;

/// Outcome of a matrix cell lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixLookup {
    /// Both headers found and the cell is not the ignore marker.
    Reportable,
    /// Both headers found and the cell holds the ignore marker.
    Ignored,
    /// At least one discipline is absent from the headers.
    Unmatched { missing: Vec<String> },
}

/// Approval matrix plus its exception list.
///
/// The first discipline of a pair is looked up on the header row (column
/// axis), the second on the header column (row axis). Headers are indexed
/// once at load; a name appearing twice on an axis resolves to its first
/// occurrence.
#[derive(Debug, Clone)]
pub struct ApprovalMatrix {
    grid: Grid,
    columns: FxHashMap<String, usize>,
    rows: FxHashMap<String, usize>,
    ignore_marker: String,
    exceptions: ExceptionList,
}

impl ApprovalMatrix {
    /// Load the matrix and exception sheets named in `config`.
    /// A missing sheet is fatal.
    pub fn load(source: &dyn GridSource, config: &MatrixConfig) -> Result<Self, MatrixError> {
        let matrix_sheet = config.effective_matrix_sheet();
        let grid = source
            .sheet(matrix_sheet)?
            .ok_or_else(|| MatrixError::SheetNotFound {
                sheet: matrix_sheet.to_string(),
            })?;

        let exception_sheet = config.effective_exception_sheet();
        let exception_grid = source
            .sheet(exception_sheet)?
            .ok_or_else(|| MatrixError::SheetNotFound {
                sheet: exception_sheet.to_string(),
            })?;

        let exceptions = ExceptionList::from_grid(&exception_grid, config);
        Self::from_grid(grid, exceptions, config, matrix_sheet)
    }

    /// Build a matrix from an already loaded grid.
    pub fn from_grid(
        grid: Grid,
        exceptions: ExceptionList,
        config: &MatrixConfig,
        sheet: &str,
    ) -> Result<Self, MatrixError> {
        let header_row = config.effective_header_row();
        let mut columns = FxHashMap::default();
        for column in config.effective_header_first_column()..=grid.row_width(header_row) {
            let name = grid.cell(header_row, column);
            if !name.is_empty() {
                columns.entry(name.to_string()).or_insert(column);
            }
        }

        let header_column = config.effective_header_column();
        let mut rows = FxHashMap::default();
        for row in config.effective_header_first_row()..=grid.row_count() {
            let name = grid.cell(row, header_column);
            if !name.is_empty() {
                rows.entry(name.to_string()).or_insert(row);
            }
        }

        if columns.is_empty() {
            return Err(MatrixError::EmptyAxis {
                sheet: sheet.to_string(),
                axis: "column",
            });
        }
        if rows.is_empty() {
            return Err(MatrixError::EmptyAxis {
                sheet: sheet.to_string(),
                axis: "row",
            });
        }

        tracing::debug!(
            columns = columns.len(),
            rows = rows.len(),
            exceptions = exceptions.len(),
            "approval matrix indexed"
        );

        Ok(Self {
            grid,
            columns,
            rows,
            ignore_marker: config.effective_ignore_marker().trim().to_string(),
            exceptions,
        })
    }

    /// Look up the cell for `(discipline_a, discipline_b)`.
    pub fn lookup(&self, discipline_a: &str, discipline_b: &str) -> MatrixLookup {
        let column = self.columns.get(discipline_a);
        let row = self.rows.get(discipline_b);
        match (column, row) {
            (Some(&column), Some(&row)) => {
                if self.grid.cell(row, column) == self.ignore_marker {
                    MatrixLookup::Ignored
                } else {
                    MatrixLookup::Reportable
                }
            }
            _ => {
                let mut missing = Vec::new();
                if column.is_none() {
                    missing.push(discipline_a.to_string());
                }
                if row.is_none() {
                    missing.push(discipline_b.to_string());
                }
                MatrixLookup::Unmatched { missing }
            }
        }
    }

    /// True only when both disciplines are in the headers and their cell is
    /// not the ignore marker. A header miss is never treated as reportable.
    pub fn is_reportable(&self, discipline_a: &str, discipline_b: &str) -> bool {
        self.lookup(discipline_a, discipline_b) == MatrixLookup::Reportable
    }

    /// True when the unordered layer pair is on the exception list.
    pub fn is_excused(&self, layer_a: &str, layer_b: &str) -> bool {
        self.exceptions.is_excused(layer_a, layer_b)
    }

    /// `is_reportable(d1, d2) && !is_excused(l1, l2)`.
    pub fn approves(&self, record: &ClashRecord) -> bool {
        self.judge(record) == Verdict::Approved
    }

    /// Full verdict for a complete record.
    pub fn judge(&self, record: &ClashRecord) -> Verdict {
        match self.lookup(record.discipline_1(), record.discipline_2()) {
            MatrixLookup::Ignored => Verdict::Ignored,
            MatrixLookup::Unmatched { missing } => Verdict::Unmatched { missing },
            MatrixLookup::Reportable => {
                if self.is_excused(record.layer_1(), record.layer_2()) {
                    Verdict::Excused
                } else {
                    Verdict::Approved
                }
            }
        }
    }

    pub fn exceptions(&self) -> &ExceptionList {
        &self.exceptions
    }

    /// Column-axis discipline names, in sheet order.
    pub fn column_disciplines(&self) -> Vec<&str> {
        sorted_by_position(&self.columns)
    }
}

fn sorted_by_position(index: &FxHashMap<String, usize>) -> Vec<&str> {
    let mut entries: Vec<(&str, usize)> = index.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by_key(|(_, position)| *position);
    entries.into_iter().map(|(name, _)| name).collect()
}
