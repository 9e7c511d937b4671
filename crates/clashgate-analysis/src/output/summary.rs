//! Conflict summary grid (CSV).
//!
//! One row group per discipline pair: a row naming both disciplines with the
//! group total, then one row per layer-pair subtotal with the layer of the
//! first-named discipline in the first layer column.

use std::path::Path;

use clashgate_core::errors::OutputError;

use crate::aggregation::ConflictAggregate;

pub const HEADER: [&str; 5] = ["Discipline 1", "Discipline 2", "Layer 1", "Layer 2", "Conflicts"];

/// Write the summary to `path`, replacing any existing file.
pub fn write_summary(path: &Path, aggregate: &ConflictAggregate) -> Result<(), OutputError> {
    let fail = |message: String| OutputError::Summary {
        path: path.to_path_buf(),
        message,
    };

    let mut writer = csv::Writer::from_path(path).map_err(|e| fail(e.to_string()))?;
    writer.write_record(HEADER).map_err(|e| fail(e.to_string()))?;

    for group in &aggregate.groups {
        let total = group.total.to_string();
        writer
            .write_record([group.first.as_str(), group.second.as_str(), "", "", total.as_str()])
            .map_err(|e| fail(e.to_string()))?;
        for tally in &group.layer_pairs {
            let count = tally.count.to_string();
            writer
                .write_record([
                    "",
                    "",
                    tally.first_layer.as_str(),
                    tally.second_layer.as_str(),
                    count.as_str(),
                ])
                .map_err(|e| fail(e.to_string()))?;
        }
    }

    writer.flush().map_err(|e| fail(e.to_string()))
}
