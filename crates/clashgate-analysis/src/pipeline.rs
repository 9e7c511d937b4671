//! Pipeline orchestration: report text -> records -> verdicts -> aggregate -> files.
//!
//! [`ClashPipeline::analyze`] is pure and does no I/O; [`ClashPipeline::run`]
//! reads the inputs, analyzes and writes every output. Fatal problems come
//! back as a single [`PipelineError`]; everything tolerable is data.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clashgate_core::config::AggregationScope;
use clashgate_core::errors::{OutputError, PipelineError, ReportError};
use clashgate_core::ClashConfig;
use serde::Serialize;

use crate::aggregation::{
    count_layer_pairs, layer_disciplines, roll_up_by_discipline, ConflictAggregate,
    LayerPairCounts,
};
use crate::matrix::{ApprovalMatrix, CsvWorkbook, Verdict, VerdictCounts};
use crate::model::ClashRecord;
use crate::output::{self, ensure_dir, LedgerWriter, WrittenIndex};
use crate::parser::{ClashRecordParser, ParseOutcome};

/// File and directory selection for one run.
#[derive(Debug, Clone)]
pub struct RunInputs {
    /// Line-oriented clash report.
    pub report: PathBuf,
    /// Matrix workbook directory (one `<sheet>.csv` per sheet).
    pub matrix: PathBuf,
    /// Directory receiving ledgers, defects and the summary.
    pub out_dir: PathBuf,
}

/// In-memory result of analyzing one report.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub parsed: ParseOutcome,
    /// One verdict per `parsed.valid` record, same order.
    pub verdicts: Vec<Verdict>,
    pub layer_pairs: LayerPairCounts,
    pub aggregate: ConflictAggregate,
}

impl Analysis {
    /// Records that go to the discipline ledgers.
    pub fn approved(&self) -> impl Iterator<Item = &ClashRecord> {
        self.judged()
            .filter(|(_, v)| **v == Verdict::Approved)
            .map(|(r, _)| r)
    }

    /// Records that passed the matrix, excused or not.
    pub fn reportable(&self) -> impl Iterator<Item = &ClashRecord> {
        self.judged()
            .filter(|(_, v)| v.is_reportable())
            .map(|(r, _)| r)
    }

    pub fn judged(&self) -> impl Iterator<Item = (&ClashRecord, &Verdict)> {
        self.parsed.valid.iter().zip(&self.verdicts)
    }

    pub fn verdict_counts(&self) -> VerdictCounts {
        VerdictCounts::tally(&self.verdicts)
    }
}

/// Totals and touched files of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub parsed: usize,
    pub valid: usize,
    pub defective: usize,
    pub verdicts: VerdictCounts,
    pub ledger_blocks_written: usize,
    pub discipline_groups: usize,
    pub conflicts: u64,
    pub disciplines_seen: Vec<String>,
    pub ledger_files: Vec<PathBuf>,
    pub defects_file: PathBuf,
    pub summary_file: PathBuf,
    pub aggregate: ConflictAggregate,
}

/// The clash report pipeline, configured once and run any number of times.
#[derive(Debug, Clone, Default)]
pub struct ClashPipeline {
    config: ClashConfig,
}

impl ClashPipeline {
    pub fn new(config: ClashConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &ClashConfig {
        &self.config
    }

    /// Read inputs, analyze, write outputs.
    pub fn run(&self, inputs: &RunInputs) -> Result<RunSummary, PipelineError> {
        let text = read_report(&inputs.report)?;

        let matrix = CsvWorkbook::open(&inputs.matrix)
            .and_then(|workbook| ApprovalMatrix::load(&workbook, &self.config.matrix))
            .inspect_err(|e| {
                tracing::error!(
                    path = %inputs.matrix.display(),
                    error = %e,
                    "cannot load approval matrix"
                );
            })?;

        let analysis = self.analyze(&text, &matrix);
        let (summary, _index) = self.write_outputs(&analysis, &inputs.out_dir, None)?;
        Ok(summary)
    }

    /// Parse, judge and aggregate a report held in memory.
    pub fn analyze(&self, text: &str, matrix: &ApprovalMatrix) -> Analysis {
        let parsed = {
            let _span = tracing::info_span!("clashgate.parse").entered();
            ClashRecordParser::parse_str(text)
        };
        tracing::info!(
            valid = parsed.valid.len(),
            defective = parsed.defective.len(),
            disciplines = parsed.disciplines_seen.len(),
            "parsed clash report"
        );

        let verdicts: Vec<Verdict> = {
            let _span = tracing::info_span!("clashgate.approve").entered();
            parsed.valid.iter().map(|r| matrix.judge(r)).collect()
        };
        let counts = VerdictCounts::tally(&verdicts);
        tracing::info!(
            approved = counts.approved,
            excused = counts.excused,
            ignored = counts.ignored,
            unmatched = counts.unmatched,
            "judged valid records"
        );

        let _span = tracing::info_span!("clashgate.aggregate").entered();
        let scope = self.config.aggregation.effective_scope();
        let scoped: Vec<&ClashRecord> = parsed
            .valid
            .iter()
            .zip(&verdicts)
            .filter(|(_, verdict)| match scope {
                AggregationScope::Reportable => verdict.is_reportable(),
                AggregationScope::AllValid => true,
            })
            .map(|(record, _)| record)
            .collect();

        let layer_pairs = count_layer_pairs(scoped.iter().copied());
        let layers = layer_disciplines(scoped.iter().copied());
        let aggregate = roll_up_by_discipline(
            &layer_pairs,
            &parsed.disciplines_seen,
            &layers,
            self.config.aggregation.effective_include_empty_groups(),
        );
        tracing::info!(
            scope = %scope,
            layer_pairs = layer_pairs.len(),
            groups = aggregate.groups.len(),
            "aggregated conflicts"
        );

        Analysis {
            parsed,
            verdicts,
            layer_pairs,
            aggregate,
        }
    }

    /// Write ledgers, defects and summary into `out_dir`.
    ///
    /// `index` carries ledger ids already written; when `None` it is seeded
    /// from the ledgers on disk if `resume_ledgers` is set, else empty. The
    /// updated index is returned for the next write.
    pub fn write_outputs(
        &self,
        analysis: &Analysis,
        out_dir: &Path,
        index: Option<WrittenIndex>,
    ) -> Result<(RunSummary, WrittenIndex), OutputError> {
        let _span =
            tracing::info_span!("clashgate.write", out_dir = %out_dir.display()).entered();
        ensure_dir(out_dir)?;

        let index = match index {
            Some(index) => index,
            None if self.config.output.effective_resume_ledgers() => {
                WrittenIndex::scan(out_dir, &analysis.parsed.disciplines_seen)?
            }
            None => WrittenIndex::new(),
        };

        let mut ledgers = LedgerWriter::new(out_dir, index)?;
        ledgers.write_all(analysis.approved())?;

        let defects_file = out_dir.join(self.config.output.effective_defects_file());
        output::write_defects(&defects_file, &analysis.parsed.defective)?;

        let summary_file = out_dir.join(self.config.output.effective_summary_file());
        output::write_summary(&summary_file, &analysis.aggregate)?;

        let summary = RunSummary {
            parsed: analysis.parsed.total(),
            valid: analysis.parsed.valid.len(),
            defective: analysis.parsed.defective.len(),
            verdicts: analysis.verdict_counts(),
            ledger_blocks_written: ledgers.blocks_written(),
            discipline_groups: analysis.aggregate.groups.len(),
            conflicts: analysis.aggregate.total(),
            disciplines_seen: analysis.parsed.disciplines_seen.clone(),
            ledger_files: ledgers.files().map(Path::to_path_buf).collect(),
            defects_file,
            summary_file,
            aggregate: analysis.aggregate.clone(),
        };
        tracing::info!(
            blocks = summary.ledger_blocks_written,
            ledgers = summary.ledger_files.len(),
            defects = summary.defective,
            "wrote run outputs"
        );

        Ok((summary, ledgers.into_index()))
    }
}

/// Read the report, decoding invalid UTF-8 lossily and dropping a leading BOM.
fn read_report(path: &Path) -> Result<String, ReportError> {
    let bytes = fs::read(path).map_err(|source| {
        tracing::error!(path = %path.display(), error = %source, "cannot read clash report");
        match source.kind() {
            ErrorKind::NotFound => ReportError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ReportError::Unreadable {
                path: path.to_path_buf(),
                source,
            },
        }
    })?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.strip_prefix('\u{feff}').unwrap_or(&text).to_string())
}
