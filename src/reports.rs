use std::collections::BTreeMap;

use crate::models::{Month, Transaction};

/// One chart bar unit per whole $10 of spending.
pub const DOLLARS_PER_UNIT: f64 = 10.0;

pub struct MonthRow {
    pub month: Month,
    pub total: f64,
    pub units: usize,
}

/// Sum expense amounts per calendar month, ascending by month. Only
/// records whose category is exactly "Expense" contribute. Units use
/// floor division: $47.00 is 4 units, $9.99 is 0.
pub fn monthly_spending(transactions: &[Transaction]) -> Vec<MonthRow> {
    let mut buckets: BTreeMap<Month, f64> = BTreeMap::new();
    for tx in transactions.iter().filter(|tx| tx.is_expense()) {
        *buckets.entry(tx.month()).or_insert(0.0) += tx.amount;
    }
    buckets
        .into_iter()
        .map(|(month, total)| MonthRow {
            month,
            total,
            units: (total / DOLLARS_PER_UNIT).floor().max(0.0) as usize,
        })
        .collect()
}
