//! Output configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the files a run writes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Defects ledger file name. Default: "defects.txt".
    pub defects_file: Option<String>,
    /// Conflict summary file name. Default: "conflict_summary.csv".
    pub summary_file: Option<String>,
    /// Seed the ledger dedup index from ledgers already on disk. Default: true.
    pub resume_ledgers: Option<bool>,
}

impl OutputConfig {
    pub fn effective_defects_file(&self) -> &str {
        self.defects_file
            .as_deref()
            .unwrap_or(constants::DEFAULT_DEFECTS_FILE)
    }

    pub fn effective_summary_file(&self) -> &str {
        self.summary_file
            .as_deref()
            .unwrap_or(constants::DEFAULT_SUMMARY_FILE)
    }

    pub fn effective_resume_ledgers(&self) -> bool {
        self.resume_ledgers.unwrap_or(true)
    }
}
