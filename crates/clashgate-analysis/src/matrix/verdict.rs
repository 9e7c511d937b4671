//! Approval verdicts.

use serde::Serialize;

/// What the approval step decided for a complete record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// Reportable per the matrix and not excused: goes to the ledgers.
    Approved,
    /// Reportable per the matrix, but the layer pair is on the exception list.
    Excused,
    /// The matrix cell is the ignore marker.
    Ignored,
    /// A discipline is missing from the matrix headers; not reportable.
    Unmatched { missing: Vec<String> },
}

impl Verdict {
    /// Passed the matrix (the "semi-approved" set), whatever the exceptions say.
    pub fn is_reportable(&self) -> bool {
        matches!(self, Self::Approved | Self::Excused)
    }
}

/// Per-verdict tallies for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VerdictCounts {
    pub approved: usize,
    pub excused: usize,
    pub ignored: usize,
    pub unmatched: usize,
}

impl VerdictCounts {
    pub fn tally<'a>(verdicts: impl IntoIterator<Item = &'a Verdict>) -> Self {
        let mut counts = Self::default();
        for verdict in verdicts {
            match verdict {
                Verdict::Approved => counts.approved += 1,
                Verdict::Excused => counts.excused += 1,
                Verdict::Ignored => counts.ignored += 1,
                Verdict::Unmatched { .. } => counts.unmatched += 1,
            }
        }
        counts
    }

    pub fn reportable(&self) -> usize {
        self.approved + self.excused
    }
}
