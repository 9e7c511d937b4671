//! Run outputs: per-discipline ledgers, the defects ledger and the
//! conflict summary grid.

pub mod defects;
pub mod ledger;
pub mod summary;

use std::fs;
use std::path::{Path, PathBuf};

use clashgate_core::constants::LEDGER_RULE_WIDTH;
use clashgate_core::errors::OutputError;

pub use defects::{defect_block, write_defects};
pub use ledger::{ledger_block, LedgerWriter, WrittenIndex};
pub use summary::write_summary;

/// Dashed rule closing every ledger and defect block.
pub fn rule() -> String {
    "-".repeat(LEDGER_RULE_WIDTH)
}

/// Ledger file name for a discipline: path separators and whitespace
/// become '-' (`Vertical Signage` -> `Vertical-Signage.txt`).
pub fn ledger_file_name(discipline: &str) -> String {
    let stem: String = discipline
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_whitespace() => '-',
            c => c,
        })
        .collect();
    format!("{stem}.txt")
}

pub(crate) fn ensure_dir(dir: &Path) -> Result<(), OutputError> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

pub(crate) fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> OutputError {
    let path: PathBuf = path.to_path_buf();
    move |source| OutputError::Write { path, source }
}

pub(crate) fn read_error(path: &Path) -> impl FnOnce(std::io::Error) -> OutputError {
    let path: PathBuf = path.to_path_buf();
    move |source| OutputError::Read { path, source }
}
