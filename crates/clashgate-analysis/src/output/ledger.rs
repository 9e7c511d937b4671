//! Per-discipline ledgers.
//!
//! Each approved clash is appended once to the ledger of each of its two
//! disciplines. A [`WrittenIndex`] tracks which clash ids each ledger
//! already holds; it is handed to the writer and handed back, so callers
//! decide its scope (one run, or seeded from disk across runs).

use std::collections::BTreeSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use clashgate_core::errors::OutputError;
use clashgate_core::types::collections::{FxHashMap, FxHashSet};

use super::{ensure_dir, ledger_file_name, read_error, rule, write_error};
use crate::model::ClashRecord;

/// Clash ids already present in each discipline's ledger.
#[derive(Debug, Clone, Default)]
pub struct WrittenIndex {
    by_discipline: FxHashMap<String, FxHashSet<String>>,
}

impl WrittenIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the index from the ledgers of `disciplines` found in `dir`.
    /// Missing ledgers are simply empty.
    pub fn scan(dir: &Path, disciplines: &[String]) -> Result<Self, OutputError> {
        let mut index = Self::new();
        for discipline in disciplines {
            let path = dir.join(ledger_file_name(discipline));
            if !path.is_file() {
                continue;
            }
            let content = fs::read(&path).map_err(read_error(&path))?;
            let content = String::from_utf8_lossy(&content);
            for line in content.lines() {
                if let Some(id) = line.trim().strip_prefix("ID:") {
                    index.insert(discipline, id.trim());
                }
            }
        }
        Ok(index)
    }

    pub fn contains(&self, discipline: &str, id: &str) -> bool {
        self.by_discipline
            .get(discipline)
            .is_some_and(|ids| ids.contains(id))
    }

    /// Returns true if the id was not yet recorded for `discipline`.
    pub fn insert(&mut self, discipline: &str, id: &str) -> bool {
        self.by_discipline
            .entry(discipline.to_string())
            .or_default()
            .insert(id.to_string())
    }

    /// Number of `(discipline, id)` entries.
    pub fn len(&self) -> usize {
        self.by_discipline.values().map(FxHashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fixed-field ledger block for one clash.
pub fn ledger_block(record: &ClashRecord) -> String {
    let (x, y, z) = record
        .coordinate
        .as_ref()
        .map_or(("", "", ""), |c| (c.x.as_str(), c.y.as_str(), c.z.as_str()));
    format!(
        "X: {x}\n\
         Y: {y}\n\
         Z: {z}\n\
         Objetos: {objects}\n\
         ID: {id}\n\
         Entity1: {e1}\n\
         Entity2: {e2}\n\
         Layer1: {l1}\n\
         Layer2: {l2}\n\
         {rule}\n",
        objects = record.discipline_pair_label(),
        id = record.id(),
        e1 = record.entity_1.as_deref().unwrap_or_default(),
        e2 = record.entity_2.as_deref().unwrap_or_default(),
        l1 = record.layer_1(),
        l2 = record.layer_2(),
        rule = rule(),
    )
}

/// Appends ledger blocks, never twice for the same `(discipline, id)`.
#[derive(Debug)]
pub struct LedgerWriter {
    dir: PathBuf,
    index: WrittenIndex,
    blocks_written: usize,
    files: BTreeSet<PathBuf>,
}

impl LedgerWriter {
    pub fn new(dir: impl Into<PathBuf>, index: WrittenIndex) -> Result<Self, OutputError> {
        let dir = dir.into();
        ensure_dir(&dir)?;
        Ok(Self {
            dir,
            index,
            blocks_written: 0,
            files: BTreeSet::new(),
        })
    }

    /// Write one record to both of its discipline ledgers.
    /// Returns the number of blocks actually appended (0, 1 or 2).
    pub fn write(&mut self, record: &ClashRecord) -> Result<usize, OutputError> {
        let block = ledger_block(record);
        let mut written = 0;
        for discipline in [record.discipline_1(), record.discipline_2()] {
            if discipline.is_empty() || !self.index.insert(discipline, record.id()) {
                continue;
            }
            let path = self.dir.join(ledger_file_name(discipline));
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(write_error(&path))?;
            file.write_all(block.as_bytes())
                .map_err(write_error(&path))?;
            self.files.insert(path);
            written += 1;
        }
        self.blocks_written += written;
        Ok(written)
    }

    pub fn write_all<'a>(
        &mut self,
        records: impl IntoIterator<Item = &'a ClashRecord>,
    ) -> Result<usize, OutputError> {
        let mut written = 0;
        for record in records {
            written += self.write(record)?;
        }
        Ok(written)
    }

    pub fn blocks_written(&self) -> usize {
        self.blocks_written
    }

    /// Ledger files appended to so far, sorted.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(PathBuf::as_path)
    }

    /// Hand the index back for the next writer.
    pub fn into_index(self) -> WrittenIndex {
        self.index
    }
}
