//! Discipline approval matrix and layer-pair exception list.
//!
//! The matrix answers "must a clash between these two disciplines be
//! reported?"; the exception list excuses specific layer pairs. Both are
//! loaded from a [`GridSource`] (a workbook of named sheets).

pub mod approval;
pub mod exceptions;
pub mod grid;
pub mod verdict;

pub use approval::{ApprovalMatrix, MatrixLookup};
pub use exceptions::ExceptionList;
pub use grid::{CsvWorkbook, Grid, GridSource, InMemoryWorkbook};
pub use verdict::{Verdict, VerdictCounts};
