//! Conflict aggregation.
//!
//! Two phases: count unordered layer-pair occurrences across records, then
//! roll those counts up into unordered discipline-pair buckets. Pure
//! counting; source records are never mutated.

pub mod layer_pairs;
pub mod rollup;

pub use layer_pairs::{count_layer_pairs, LayerPair, LayerPairCounts};
pub use rollup::{
    layer_disciplines, roll_up_by_discipline, ConflictAggregate, DisciplinePairSummary,
    LayerDisciplines, LayerPairTally,
};
