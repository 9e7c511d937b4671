//! Layer-pair exception list.

use clashgate_core::config::MatrixConfig;
use clashgate_core::types::collections::FxHashSet;

use super::grid::Grid;

/// Unordered set of layer pairs whose clashes are excused.
#[derive(Debug, Clone, Default)]
pub struct ExceptionList {
    pairs: FxHashSet<(String, String)>,
}

impl ExceptionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `(_, layer_a, _, layer_b)` rows; rows missing either layer are skipped.
    pub fn from_grid(grid: &Grid, config: &MatrixConfig) -> Self {
        let column_a = config.effective_exception_layer_a_column();
        let column_b = config.effective_exception_layer_b_column();
        let mut list = Self::new();
        for row in config.effective_exception_first_row()..=grid.row_count() {
            let layer_a = grid.cell(row, column_a);
            let layer_b = grid.cell(row, column_b);
            if !layer_a.is_empty() && !layer_b.is_empty() {
                list.insert(layer_a, layer_b);
            }
        }
        list
    }

    /// Add a pair; returns false if it (in either order) was already present.
    pub fn insert(&mut self, layer_a: &str, layer_b: &str) -> bool {
        self.pairs.insert(normalize(layer_a, layer_b))
    }

    /// `is_excused(a, b) == is_excused(b, a)` for all inputs.
    pub fn is_excused(&self, layer_a: &str, layer_b: &str) -> bool {
        self.pairs.contains(&normalize(layer_a, layer_b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<A: AsRef<str>, B: AsRef<str>> FromIterator<(A, B)> for ExceptionList {
    fn from_iter<T: IntoIterator<Item = (A, B)>>(iter: T) -> Self {
        let mut list = Self::new();
        for (a, b) in iter {
            list.insert(a.as_ref(), b.as_ref());
        }
        list
    }
}

fn ordered<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn normalize(a: &str, b: &str) -> (String, String) {
    let (first, second) = ordered(a, b);
    (first.to_string(), second.to_string())
}
