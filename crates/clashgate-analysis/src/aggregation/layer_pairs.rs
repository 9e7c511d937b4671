//! Unordered layer-pair counting.

use clashgate_core::types::collections::FxHashMap;
use serde::Serialize;

use crate::model::ClashRecord;

/// A layer pair in its canonical orientation: the order in which it was
/// first encountered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LayerPair {
    pub first: String,
    pub second: String,
}

impl LayerPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Order-independent key: `(A, B)` and `(B, A)` map to the same value.
    pub fn key(&self) -> (String, String) {
        unordered_key(&self.first, &self.second)
    }
}

fn unordered_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// Occurrence counts per unordered layer pair, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct LayerPairCounts {
    entries: Vec<(LayerPair, u64)>,
    index: FxHashMap<(String, String), usize>,
}

impl LayerPairCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `(a, b)`. The first orientation seen is kept.
    pub fn record(&mut self, a: &str, b: &str) {
        self.add(a, b, 1);
    }

    pub fn add(&mut self, a: &str, b: &str, count: u64) {
        let key = unordered_key(a, b);
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += count,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((LayerPair::new(a, b), count));
            }
        }
    }

    /// Count for `(a, b)` in either order.
    pub fn count(&self, a: &str, b: &str) -> u64 {
        self.index
            .get(&unordered_key(a, b))
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Canonical orientation stored for `(a, b)`, if counted.
    pub fn canonical(&self, a: &str, b: &str) -> Option<&LayerPair> {
        self.index
            .get(&unordered_key(a, b))
            .map(|&slot| &self.entries[slot].0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LayerPair, u64)> {
        self.entries.iter().map(|(pair, count)| (pair, *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

/// Count `(layer_1, layer_2)` for every record.
pub fn count_layer_pairs<'a>(
    records: impl IntoIterator<Item = &'a ClashRecord>,
) -> LayerPairCounts {
    let mut counts = LayerPairCounts::new();
    for record in records {
        counts.record(record.layer_1(), record.layer_2());
    }
    counts
}
