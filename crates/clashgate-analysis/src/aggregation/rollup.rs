//! Discipline-pair roll-up of layer-pair counts.

use clashgate_core::types::collections::FxHashMap;
use serde::Serialize;

use super::layer_pairs::LayerPairCounts;
use crate::model::ClashRecord;

/// Which disciplines each layer was seen under, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct LayerDisciplines {
    map: FxHashMap<String, Vec<String>>,
}

impl LayerDisciplines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, layer: &str, discipline: &str) {
        let disciplines = self.map.entry(layer.to_string()).or_default();
        if !disciplines.iter().any(|d| d == discipline) {
            disciplines.push(discipline.to_string());
        }
    }

    pub fn belongs(&self, layer: &str, discipline: &str) -> bool {
        self.map
            .get(layer)
            .is_some_and(|ds| ds.iter().any(|d| d == discipline))
    }
}

/// Map each record's `layer_1` to `discipline_1` and `layer_2` to `discipline_2`.
pub fn layer_disciplines<'a>(
    records: impl IntoIterator<Item = &'a ClashRecord>,
) -> LayerDisciplines {
    let mut map = LayerDisciplines::new();
    for record in records {
        map.insert(record.layer_1(), record.discipline_1());
        map.insert(record.layer_2(), record.discipline_2());
    }
    map
}

/// One layer-pair subtotal inside a discipline-pair group, oriented so that
/// `first_layer` belongs to the group's first discipline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerPairTally {
    pub first_layer: String,
    pub second_layer: String,
    pub count: u64,
}

/// Conflicts between one unordered pair of disciplines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisciplinePairSummary {
    pub first: String,
    pub second: String,
    pub total: u64,
    pub layer_pairs: Vec<LayerPairTally>,
}

impl DisciplinePairSummary {
    /// `A x B` label used in summaries.
    pub fn label(&self) -> String {
        format!("{} x {}", self.first, self.second)
    }

    pub fn matches(&self, a: &str, b: &str) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }
}

/// Discipline-pair groups in `disciplines_seen` order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConflictAggregate {
    pub groups: Vec<DisciplinePairSummary>,
}

impl ConflictAggregate {
    /// Group for the unordered pair `{a, b}`.
    pub fn get(&self, a: &str, b: &str) -> Option<&DisciplinePairSummary> {
        self.groups.iter().find(|g| g.matches(a, b))
    }

    pub fn total(&self) -> u64 {
        self.groups.iter().map(|g| g.total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Roll layer-pair counts up into discipline-pair buckets.
///
/// Every unordered pair of `disciplines_seen` is considered, including a
/// discipline paired with itself. A layer pair contributes to `{D1, D2}` when
/// one layer belongs to D1 and the other to D2, checked in both orientations.
/// Layer pairs matching no bucket are left out of the roll-up. Groups with a
/// zero total are emitted only when `include_empty` is set.
pub fn roll_up_by_discipline(
    counts: &LayerPairCounts,
    disciplines_seen: &[String],
    layers: &LayerDisciplines,
    include_empty: bool,
) -> ConflictAggregate {
    let mut groups = Vec::new();

    for (i, first) in disciplines_seen.iter().enumerate() {
        for second in &disciplines_seen[i..] {
            let mut summary = DisciplinePairSummary {
                first: first.clone(),
                second: second.clone(),
                total: 0,
                layer_pairs: Vec::new(),
            };

            for (pair, count) in counts.iter() {
                let forward =
                    layers.belongs(&pair.first, first) && layers.belongs(&pair.second, second);
                let reverse =
                    layers.belongs(&pair.second, first) && layers.belongs(&pair.first, second);
                let oriented = if forward {
                    Some((&pair.first, &pair.second))
                } else if reverse {
                    Some((&pair.second, &pair.first))
                } else {
                    None
                };

                if let Some((first_layer, second_layer)) = oriented {
                    summary.total += count;
                    summary.layer_pairs.push(LayerPairTally {
                        first_layer: first_layer.clone(),
                        second_layer: second_layer.clone(),
                        count,
                    });
                }
            }

            if summary.total > 0 || include_empty {
                groups.push(summary);
            }
        }
    }

    ConflictAggregate { groups }
}
