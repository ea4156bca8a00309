use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Transaction;
use crate::store::{self, LoadOutcome};

/// Owns the in-memory transaction register and the path it persists to.
/// The path is injected at construction so tests can point it at a temp
/// directory instead of the real data file.
pub struct Tracker {
    transactions: Vec<Transaction>,
    data_file: PathBuf,
}

impl Tracker {
    /// Open a tracker backed by `data_file`, loading existing records if
    /// the file is present.
    pub fn open(data_file: impl Into<PathBuf>) -> Result<(Self, LoadOutcome)> {
        let data_file = data_file.into();
        let (transactions, outcome) = store::load(&data_file)?;
        Ok((
            Self {
                transactions,
                data_file,
            },
            outcome,
        ))
    }

    /// A tracker with no records; nothing is read from disk.
    pub fn empty(data_file: impl Into<PathBuf>) -> Self {
        Self {
            transactions: Vec::new(),
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Append a record. Duplicates are allowed; there is no identity.
    pub fn add(&mut self, tx: Transaction) {
        self.transactions.push(tx);
    }

    /// Case-insensitive substring match against descriptions, preserving
    /// the register's relative order.
    pub fn search(&self, keyword: &str) -> Vec<&Transaction> {
        let needle = keyword.to_lowercase();
        self.transactions
            .iter()
            .filter(|tx| tx.description.to_lowercase().contains(&needle))
            .collect()
    }

    /// Expense records with amount strictly greater than `threshold`.
    pub fn expenses_over(&self, threshold: f64) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|tx| tx.is_expense() && tx.amount > threshold)
            .collect()
    }

    /// Ascending by date. `sort_by_key` is stable, so records with equal
    /// dates keep their insertion order.
    pub fn sort_by_date(&mut self) {
        self.transactions.sort_by_key(|tx| tx.date);
    }

    pub fn save(&self) -> Result<()> {
        store::save(&self.data_file, &self.transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tx(d: NaiveDate, category: &str, description: &str, amount: f64) -> Transaction {
        Transaction::new(d, category, description, amount)
    }

    #[test]
    fn test_add_then_view() {
        let mut tracker = Tracker::empty("unused.json");
        let record = tx(date(2024, 1, 5), "Expense", "Morning Coffee", 4.50);
        tracker.add(record.clone());
        assert_eq!(tracker.transactions().last(), Some(&record));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut tracker = Tracker::empty("unused.json");
        tracker.add(tx(date(2024, 1, 5), "Expense", "Morning Coffee", 4.50));
        tracker.add(tx(date(2024, 1, 6), "Expense", "Bus ticket", 2.75));
        let found = tracker.search("coffee");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].description, "Morning Coffee");
        assert!(tracker.search("COFFEE").len() == 1);
        assert!(tracker.search("pizza").is_empty());
    }

    #[test]
    fn test_search_preserves_order() {
        let mut tracker = Tracker::empty("unused.json");
        tracker.add(tx(date(2024, 2, 1), "Expense", "Coffee beans", 12.0));
        tracker.add(tx(date(2024, 1, 1), "Expense", "Iced coffee", 5.0));
        let found = tracker.search("coffee");
        assert_eq!(found[0].description, "Coffee beans");
        assert_eq!(found[1].description, "Iced coffee");
    }

    #[test]
    fn test_expenses_over_threshold() {
        let mut tracker = Tracker::empty("unused.json");
        tracker.add(tx(date(2024, 1, 1), "Expense", "cheap", 40.0));
        tracker.add(tx(date(2024, 1, 2), "Expense", "pricey", 60.0));
        tracker.add(tx(date(2024, 1, 3), "Income", "pay", 100.0));
        let result = tracker.expenses_over(50.0);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].description, "pricey");
    }

    #[test]
    fn test_expenses_over_is_strict() {
        let mut tracker = Tracker::empty("unused.json");
        tracker.add(tx(date(2024, 1, 1), "Expense", "exact", 50.0));
        assert!(tracker.expenses_over(50.0).is_empty());
    }

    #[test]
    fn test_sort_by_date() {
        let mut tracker = Tracker::empty("unused.json");
        tracker.add(tx(date(2024, 3, 1), "Expense", "c", 1.0));
        tracker.add(tx(date(2024, 1, 1), "Expense", "a", 1.0));
        tracker.add(tx(date(2024, 2, 1), "Expense", "b", 1.0));
        tracker.sort_by_date();
        let order: Vec<&str> = tracker
            .transactions()
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let mut tracker = Tracker::empty("unused.json");
        tracker.add(tx(date(2024, 1, 1), "Expense", "first", 1.0));
        tracker.add(tx(date(2024, 1, 1), "Expense", "second", 2.0));
        tracker.sort_by_date();
        let once: Vec<Transaction> = tracker.transactions().to_vec();
        assert_eq!(once[0].description, "first");
        assert_eq!(once[1].description, "second");
        tracker.sort_by_date();
        assert_eq!(tracker.transactions(), once.as_slice());
    }

    #[test]
    fn test_open_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transactions.json");
        let mut tracker = Tracker::empty(&path);
        tracker.add(tx(date(2024, 1, 5), "Income", "Paycheck", 2500.0));
        tracker.save().unwrap();

        let (reloaded, outcome) = Tracker::open(&path).unwrap();
        assert_eq!(outcome, LoadOutcome::Loaded(1));
        assert_eq!(reloaded.transactions(), tracker.transactions());
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let (tracker, outcome) = Tracker::open(dir.path().join("none.json")).unwrap();
        assert_eq!(outcome, LoadOutcome::Missing);
        assert!(tracker.is_empty());
    }
}
