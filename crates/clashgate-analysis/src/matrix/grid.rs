//! Tabular grid sources.

use std::path::{Path, PathBuf};

use clashgate_core::errors::MatrixError;
use clashgate_core::types::collections::FxHashMap;

/// A sheet of trimmed cell strings addressed by 1-based `(row, column)`.
/// Rows may differ in length; cells outside the data read as blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|c| c.trim().to_string()).collect())
            .collect();
        Self { rows }
    }

    /// Build a grid from string-like rows (handy in tests).
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// Cell at 1-based `(row, column)`; blank when out of range.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        if row == 0 || column == 0 {
            return "";
        }
        self.rows
            .get(row - 1)
            .and_then(|r| r.get(column - 1))
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in the 1-based `row`.
    pub fn row_width(&self, row: usize) -> usize {
        row.checked_sub(1)
            .and_then(|r| self.rows.get(r))
            .map_or(0, Vec::len)
    }
}

/// A workbook of named sheets.
pub trait GridSource {
    /// Returns the sheet called `name`, or `Ok(None)` if the workbook has no
    /// such sheet. Errors are reserved for sheets that exist but cannot be read.
    fn sheet(&self, name: &str) -> Result<Option<Grid>, MatrixError>;
}

/// Directory-backed workbook: each sheet is a `<sheet>.csv` file.
#[derive(Debug, Clone)]
pub struct CsvWorkbook {
    root: PathBuf,
}

impl CsvWorkbook {
    /// Open a workbook directory. A missing path or a plain file is fatal.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, MatrixError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(MatrixError::WorkbookNotFound {
                path: root.to_path_buf(),
            });
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn sheet_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.csv"))
    }
}

impl GridSource for CsvWorkbook {
    fn sheet(&self, name: &str) -> Result<Option<Grid>, MatrixError> {
        let path = self.sheet_path(name);
        if !path.is_file() {
            return Ok(None);
        }

        let unreadable = |message: String| MatrixError::Unreadable {
            path: path.clone(),
            message,
        };
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)
            .map_err(|e| unreadable(e.to_string()))?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| unreadable(e.to_string()))?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        tracing::debug!(sheet = name, rows = rows.len(), "loaded sheet");
        Ok(Some(Grid::new(rows)))
    }
}

/// Workbook held in memory, for embedders and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkbook {
    sheets: FxHashMap<String, Grid>,
}

impl InMemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, name: impl Into<String>, grid: Grid) -> Self {
        self.sheets.insert(name.into(), grid);
        self
    }
}

impl GridSource for InMemoryWorkbook {
    fn sheet(&self, name: &str) -> Result<Option<Grid>, MatrixError> {
        Ok(self.sheets.get(name).cloned())
    }
}
