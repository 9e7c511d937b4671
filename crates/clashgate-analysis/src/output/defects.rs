//! Defects ledger.

use std::fs;
use std::path::Path;

use clashgate_core::constants::NOT_AVAILABLE;
use clashgate_core::errors::OutputError;

use super::{rule, write_error};
use crate::model::ClashRecord;

fn or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}

/// Block listing every field of a defective record, `N/A` for missing ones.
pub fn defect_block(record: &ClashRecord) -> String {
    let coordinate = record.coordinate.as_ref();
    let missing: Vec<&str> = record
        .missing_fields()
        .iter()
        .map(|f| f.as_str())
        .collect();
    let missing = if missing.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        missing.join(", ")
    };
    format!(
        "Line: {line}\n\
         Name: {name}\n\
         ID: {id}\n\
         X: {x}\n\
         Y: {y}\n\
         Z: {z}\n\
         Discipline1: {d1}\n\
         Discipline2: {d2}\n\
         Entity1: {e1}\n\
         Entity2: {e2}\n\
         Layer1: {l1}\n\
         Layer2: {l2}\n\
         HardStatus: {status}\n\
         DateCreated: {created}\n\
         Missing: {missing}\n\
         {rule}\n",
        line = record.line,
        name = or_na(record.name.as_deref()),
        id = or_na(record.id.as_deref()),
        x = or_na(coordinate.map(|c| c.x.as_str())),
        y = or_na(coordinate.map(|c| c.y.as_str())),
        z = or_na(coordinate.map(|c| c.z.as_str())),
        d1 = or_na(record.discipline_1.as_deref()),
        d2 = or_na(record.discipline_2.as_deref()),
        e1 = or_na(record.entity_1.as_deref()),
        e2 = or_na(record.entity_2.as_deref()),
        l1 = or_na(record.layer_1.as_deref()),
        l2 = or_na(record.layer_2.as_deref()),
        status = or_na(record.hard_status.as_deref()),
        created = or_na(record.date_created.as_deref()),
        rule = rule(),
    )
}

/// Overwrite `path` with one block per defective record.
pub fn write_defects(path: &Path, defects: &[ClashRecord]) -> Result<(), OutputError> {
    let content: String = defects.iter().map(defect_block).collect();
    fs::write(path, content).map_err(write_error(path))
}
