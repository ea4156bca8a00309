use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};

/// Category string that the filter and chart operations treat specially.
/// Matching is exact against this normalized form; `normalize_category`
/// makes interactive entry hit it for any casing of "expense".
pub const EXPENSE_CATEGORY: &str = "Expense";

/// One recorded financial event. Serialized as a JSON object with exactly
/// the keys `date`, `category`, `description`, `amount`; the date is the
/// ISO `YYYY-MM-DD` form chrono uses for `NaiveDate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub amount: f64,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            description: description.into(),
            amount,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.category == EXPENSE_CATEGORY
    }

    /// Calendar month the transaction falls in, used for chart bucketing.
    pub fn month(&self) -> Month {
        Month {
            year: self.date.year(),
            month: self.date.month(),
        }
    }
}

/// A (year, month) bucket key. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Uppercase the first character, lowercase the rest: "expense" and
/// "EXPENSE" both become "Expense". Multi-word categories keep only their
/// leading capital.
pub fn normalize_category(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| TallyError::InvalidDate(trimmed.to_string()))
}

pub fn parse_amount(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| TallyError::InvalidAmount(trimmed.to_string()))
}

pub fn parse_threshold(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| TallyError::InvalidThreshold(trimmed.to_string()))
}
