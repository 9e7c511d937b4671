//! Clash report parser.
//!
//! Single forward pass over a line-oriented report. Recognized lines are
//! prefix-matched after trimming; anything else is ignored. A record is
//! finalized when the next `Name:` header or a dashed separator arrives, or
//! when input ends, and is routed to `valid` or `defective` by completeness.
//! No record is ever dropped.

use clashgate_core::constants::{EMPTY_LAYER, MIN_SEPARATOR_LEN};
use clashgate_core::types::collections::FxHashSet;
use serde::Serialize;

use crate::classifier;
use crate::model::{ClashRecord, Coordinate};

const NAME: &str = "Name:";
const IMAGE_LOCATION: &str = "Image Location:";
const CLASH_POINT: &str = "Clash Point:";
const PATH: &str = "Path:";
const ENTITY_HANDLE: &str = "Entity Handle:";
const LAYER: &str = "Layer:";
const HARD_STATUS: &str = "HardStatus:";
const DATE_CREATED: &str = "Date Created:";
const DISTANCE: &str = "Distance:";
const DATE_APPROVED: &str = "Date Approved:";
const APPROVED_BY: &str = "Approved By:";

/// Result of parsing one report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseOutcome {
    pub valid: Vec<ClashRecord>,
    pub defective: Vec<ClashRecord>,
    /// Disciplines resolved from `Path:` lines, in first-seen order.
    pub disciplines_seen: Vec<String>,
}

impl ParseOutcome {
    pub fn total(&self) -> usize {
        self.valid.len() + self.defective.len()
    }
}

/// Which item section header a line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Item {
    First,
    Second,
}

/// Line-oriented clash report parser.
#[derive(Debug, Default)]
pub struct ClashRecordParser {
    outcome: ParseOutcome,
    seen: FxHashSet<String>,
    current: Option<ClashRecord>,
}

impl ClashRecordParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whole report held in memory.
    pub fn parse_str(text: &str) -> ParseOutcome {
        Self::parse_lines(text.lines())
    }

    /// Parse a sequence of raw report lines.
    pub fn parse_lines<I, S>(lines: I) -> ParseOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let owned: Vec<S> = lines.into_iter().collect();
        // Blank lines carry nothing; dropping them up front makes the
        // `Item N` lookahead see the next meaningful line.
        let lines: Vec<(usize, &str)> = owned
            .iter()
            .enumerate()
            .map(|(i, l)| (i + 1, l.as_ref().trim()))
            .filter(|(_, l)| !l.is_empty())
            .collect();

        let mut parser = Self::new();
        for (idx, &(number, line)) in lines.iter().enumerate() {
            let next = lines.get(idx + 1).map(|&(_, l)| l);
            parser.feed(number, line, next);
        }
        parser.finish()
    }

    /// Consume one trimmed, non-blank line. `next` is the following
    /// non-blank line, used by the `Item N` lookahead.
    pub fn feed(&mut self, number: usize, line: &str, next: Option<&str>) {
        if let Some(value) = field(line, NAME) {
            self.finalize();
            let mut record = ClashRecord::starting_at(number);
            record.name = Some(value.to_string());
            self.current = Some(record);
            return;
        }

        if is_separator(line) {
            self.finalize();
            return;
        }

        if let Some(item) = item_header(line) {
            let layer = next
                .and_then(|n| field(n, LAYER))
                .filter(|v| !v.is_empty())
                .unwrap_or(EMPTY_LAYER)
                .to_string();
            let record = self.open(number);
            match item {
                Item::First => record.layer_1 = Some(layer),
                Item::Second => record.layer_2 = Some(layer),
            }
            return;
        }

        if let Some(value) = field(line, IMAGE_LOCATION) {
            let id = image_id(value);
            self.open(number).id = id;
        } else if let Some(value) = field(line, CLASH_POINT) {
            self.open(number).coordinate = Coordinate::parse(value);
        } else if let Some(value) = field(line, PATH) {
            let discipline = classifier::classify(value);
            let record = self.open(number);
            match discipline {
                Some(d) => {
                    if record.discipline_1.is_none() {
                        record.discipline_1 = Some(d.to_string());
                    } else {
                        record.discipline_2 = Some(d.to_string());
                    }
                    if self.seen.insert(d.to_string()) {
                        self.outcome.disciplines_seen.push(d.to_string());
                    }
                }
                None => {
                    tracing::trace!(line = number, path = value, "unrecognized discipline path")
                }
            }
        } else if let Some(value) = field(line, ENTITY_HANDLE) {
            let record = self.open(number);
            if record.entity_1.is_none() {
                record.entity_1 = Some(value.to_string());
            } else {
                record.entity_2 = Some(value.to_string());
            }
        } else if let Some(value) = field(line, HARD_STATUS) {
            self.open(number).hard_status = Some(value.to_string());
        } else if let Some(value) = field(line, DATE_CREATED) {
            self.open(number).date_created = Some(value.to_string());
        } else if let Some(value) = field(line, DISTANCE) {
            self.open(number).distance = Some(value.to_string());
        } else if let Some(value) = field(line, DATE_APPROVED) {
            self.open(number).date_approved = Some(value.to_string());
        } else if let Some(value) = field(line, APPROVED_BY) {
            self.open(number).approved_by = Some(value.to_string());
        }
        // `Layer:` lines are consumed by the item lookahead; anything else is noise.
    }

    /// Finalize the open record, if any, and return everything parsed.
    pub fn finish(mut self) -> ParseOutcome {
        self.finalize();
        self.outcome
    }

    /// Record under construction; opens one implicitly when a field line
    /// arrives outside a block so its data still reaches an output list.
    fn open(&mut self, number: usize) -> &mut ClashRecord {
        self.current
            .get_or_insert_with(|| ClashRecord::starting_at(number))
    }

    fn finalize(&mut self) {
        let Some(record) = self.current.take() else {
            return;
        };
        if record.is_complete() {
            self.outcome.valid.push(record);
        } else {
            tracing::debug!(
                line = record.line,
                name = record.name(),
                missing = ?record.missing_fields(),
                "defective clash record"
            );
            self.outcome.defective.push(record);
        }
    }
}

/// Value of a `Prefix: value` line, trimmed.
fn field<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.strip_prefix(prefix).map(str::trim)
}

fn is_separator(line: &str) -> bool {
    line.len() >= MIN_SEPARATOR_LEN && line.chars().all(|c| c == '-')
}

fn item_header(line: &str) -> Option<Item> {
    let rest = line.strip_prefix("Item")?.trim().trim_end_matches(':').trim();
    match rest {
        "1" => Some(Item::First),
        "2" => Some(Item::Second),
        _ => None,
    }
}

/// Clash id from an image location: file name after the last path
/// separator, up to its first '.'.
fn image_id(location: &str) -> Option<String> {
    let file_name = location
        .rsplit(['\\', '/'])
        .next()
        .unwrap_or(location);
    let id = file_name.split('.').next().unwrap_or(file_name).trim();
    (!id.is_empty()).then(|| id.to_string())
}
