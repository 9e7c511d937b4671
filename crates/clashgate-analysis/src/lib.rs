//! # clashgate-analysis
//!
//! Clash report engine: classifies element paths into disciplines, parses
//! clash reports into records, judges them against the discipline approval
//! matrix, aggregates conflicts per discipline pair, and writes the ledgers.

pub mod aggregation;
pub mod classifier;
pub mod matrix;
pub mod model;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod reporters;

pub use aggregation::{ConflictAggregate, DisciplinePairSummary, LayerPairCounts};
pub use classifier::classify;
pub use matrix::{ApprovalMatrix, CsvWorkbook, ExceptionList, Grid, GridSource, Verdict};
pub use model::{ClashRecord, Coordinate, RecordField};
pub use parser::{ClashRecordParser, ParseOutcome};
pub use output::{LedgerWriter, WrittenIndex};
pub use pipeline::{Analysis, ClashPipeline, RunInputs, RunSummary};
pub use reporters::{create_reporter, Reporter};
