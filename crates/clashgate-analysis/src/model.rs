//! Clash record data model.

use std::fmt;

use clashgate_core::constants::EMPTY_LAYER;
use serde::Serialize;

/// Clash point with the unit suffix stripped.
///
/// Components keep their textual form so ledgers reproduce the report
/// verbatim; construction guarantees each one parses as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coordinate {
    pub x: String,
    pub y: String,
    pub z: String,
}

impl Coordinate {
    /// Parse a `x, y, z` triple such as `1204.35m, 88.10m, 12.00m`.
    /// Returns `None` unless there are exactly three numeric components.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.split(',').map(strip_unit);
        let x = parts.next()?;
        let y = parts.next()?;
        let z = parts.next()?;
        if parts.next().is_some() || [x, y, z].iter().any(|c| c.is_empty()) {
            return None;
        }
        Some(Self {
            x: x.to_string(),
            y: y.to_string(),
            z: z.to_string(),
        })
    }

    /// Numeric view of the three components.
    pub fn values(&self) -> Option<[f64; 3]> {
        Some([
            self.x.parse().ok()?,
            self.y.parse().ok()?,
            self.z.parse().ok()?,
        ])
    }
}

/// Trims a component and drops a trailing alphabetic unit (`m`, `mm`, `ft`).
/// Empty or non-numeric components yield `""`, which `Coordinate::parse` rejects.
fn strip_unit(component: &str) -> &str {
    let value = component
        .trim()
        .trim_end_matches(|c: char| c.is_alphabetic())
        .trim_end();
    if value.parse::<f64>().is_ok() {
        value
    } else {
        ""
    }
}

/// Fields that take part in the completeness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordField {
    Name,
    Id,
    Coordinate,
    Discipline1,
    Discipline2,
    Layer1,
    Layer2,
}

impl RecordField {
    pub const ALL: [RecordField; 7] = [
        Self::Name,
        Self::Id,
        Self::Coordinate,
        Self::Discipline1,
        Self::Discipline2,
        Self::Layer1,
        Self::Layer2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Id => "id",
            Self::Coordinate => "coordinate",
            Self::Discipline1 => "discipline_1",
            Self::Discipline2 => "discipline_2",
            Self::Layer1 => "layer_1",
            Self::Layer2 => "layer_2",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected collision between two model elements.
///
/// Built field by field while scanning a report block. Every field is
/// optional until finalization; [`ClashRecord::is_complete`] decides whether
/// the record is valid or goes to the defects ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClashRecord {
    /// 1-based report line where the block started.
    pub line: usize,
    pub name: Option<String>,
    pub id: Option<String>,
    pub coordinate: Option<Coordinate>,
    pub discipline_1: Option<String>,
    pub discipline_2: Option<String>,
    pub entity_1: Option<String>,
    pub entity_2: Option<String>,
    pub layer_1: Option<String>,
    pub layer_2: Option<String>,
    pub hard_status: Option<String>,
    pub date_created: Option<String>,
    pub distance: Option<String>,
    pub date_approved: Option<String>,
    pub approved_by: Option<String>,
}

impl ClashRecord {
    pub fn starting_at(line: usize) -> Self {
        Self {
            line,
            ..Self::default()
        }
    }

    /// Fields that are absent, blank, or hold the empty-layer sentinel.
    pub fn missing_fields(&self) -> Vec<RecordField> {
        RecordField::ALL
            .into_iter()
            .filter(|field| !self.has(*field))
            .collect()
    }

    /// True iff every required field is present, non-empty, and neither
    /// layer is the empty-layer sentinel.
    pub fn is_complete(&self) -> bool {
        RecordField::ALL.into_iter().all(|field| self.has(field))
    }

    fn has(&self, field: RecordField) -> bool {
        match field {
            RecordField::Name => filled(&self.name),
            RecordField::Id => filled(&self.id),
            RecordField::Coordinate => self.coordinate.is_some(),
            RecordField::Discipline1 => filled(&self.discipline_1),
            RecordField::Discipline2 => filled(&self.discipline_2),
            RecordField::Layer1 => is_real_layer(&self.layer_1),
            RecordField::Layer2 => is_real_layer(&self.layer_2),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn discipline_1(&self) -> &str {
        self.discipline_1.as_deref().unwrap_or_default()
    }

    pub fn discipline_2(&self) -> &str {
        self.discipline_2.as_deref().unwrap_or_default()
    }

    pub fn layer_1(&self) -> &str {
        self.layer_1.as_deref().unwrap_or_default()
    }

    pub fn layer_2(&self) -> &str {
        self.layer_2.as_deref().unwrap_or_default()
    }

    /// Discipline pair joined the way the ledgers print it: `A X B`.
    pub fn discipline_pair_label(&self) -> String {
        format!("{} X {}", self.discipline_1(), self.discipline_2())
    }
}

fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn is_real_layer(value: &Option<String>) -> bool {
    filled(value) && value.as_deref() != Some(EMPTY_LAYER)
}
