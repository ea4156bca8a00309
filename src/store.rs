use std::fs;
use std::path::Path;

use crate::error::{Result, TallyError};
use crate::models::Transaction;

pub const DEFAULT_DATA_FILE: &str = "data/transactions.json";

/// What `load` found on disk. The menu reports each case differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No data file yet; starting with an empty register.
    Missing,
    /// File parsed cleanly; carries the record count.
    Loaded(usize),
    /// File exists but is not valid JSON. The register starts empty and
    /// the file is left untouched until the next save overwrites it.
    Corrupted,
}

/// Read the transaction file. Syntactically broken JSON is recovered as
/// `Corrupted`; valid JSON of the wrong shape (missing key, bad date,
/// non-numeric amount) is a hard `MalformedRecord` error so a typo in a
/// hand-edited file doesn't silently drop records.
pub fn load(path: &Path) -> Result<(Vec<Transaction>, LoadOutcome)> {
    if !path.exists() {
        return Ok((Vec::new(), LoadOutcome::Missing));
    }
    let content = fs::read_to_string(path)?;
    match serde_json::from_str::<Vec<Transaction>>(&content) {
        Ok(transactions) => {
            let count = transactions.len();
            Ok((transactions, LoadOutcome::Loaded(count)))
        }
        Err(e) if e.is_data() => Err(TallyError::MalformedRecord(e.to_string())),
        Err(_) => Ok((Vec::new(), LoadOutcome::Corrupted)),
    }
}

/// Write the full sequence as pretty-printed JSON, creating the parent
/// directory if needed. Whole-file overwrite, no atomic rename or backup.
pub fn save(path: &Path, transactions: &[Transaction]) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    let json = serde_json::to_string_pretty(transactions)?;
    fs::write(path, format!("{json}\n"))?;
    Ok(())
}
