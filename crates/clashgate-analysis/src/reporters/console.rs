//! Console reporter: plain-text run summary.

use std::fmt::Write as _;

use super::Reporter;
use crate::pipeline::RunSummary;

/// Human-readable summary of a run.
pub struct ConsoleReporter {
    /// List each layer-pair subtotal under its discipline group.
    pub show_layer_pairs: bool,
}

impl ConsoleReporter {
    pub fn new(show_layer_pairs: bool) -> Self {
        Self { show_layer_pairs }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn generate(&self, summary: &RunSummary) -> Result<String, String> {
        let mut out = String::new();
        let v = &summary.verdicts;
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "Parsed {} clash records: {} valid, {} defective",
            summary.parsed, summary.valid, summary.defective
        );
        let _ = writeln!(
            out,
            "Verdicts: {} approved, {} excused, {} ignored, {} unmatched",
            v.approved, v.excused, v.ignored, v.unmatched
        );
        let _ = writeln!(
            out,
            "Ledgers: {} blocks written to {} files",
            summary.ledger_blocks_written,
            summary.ledger_files.len()
        );
        for file in &summary.ledger_files {
            let _ = writeln!(out, "  {}", file.display());
        }
        let _ = writeln!(out, "Defects: {}", summary.defects_file.display());
        let _ = writeln!(out, "Summary: {}", summary.summary_file.display());

        let _ = writeln!(
            out,
            "\nConflicts: {} in {} discipline pairs",
            summary.conflicts, summary.discipline_groups
        );
        for group in &summary.aggregate.groups {
            let _ = writeln!(out, "  {}: {}", group.label(), group.total);
            if self.show_layer_pairs {
                for tally in &group.layer_pairs {
                    let _ = writeln!(
                        out,
                        "    {} / {}: {}",
                        tally.first_layer, tally.second_layer, tally.count
                    );
                }
            }
        }

        Ok(out)
    }
}
