use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::fmt::money;
use crate::models::Transaction;
use crate::reports::MonthRow;

fn transaction_table(rows: &[&Transaction]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Date", "Category", "Description", "Amount"]);
    for tx in rows {
        let amount = if tx.is_expense() {
            money(tx.amount).red().to_string()
        } else {
            money(tx.amount).green().to_string()
        };
        table.add_row(vec![
            Cell::new(tx.date),
            Cell::new(&tx.category),
            Cell::new(&tx.description),
            Cell::new(amount),
        ]);
    }
    table
}

pub fn format_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }
    let refs: Vec<&Transaction> = transactions.iter().collect();
    format!(
        "All Transactions ({})\n{}",
        transactions.len(),
        transaction_table(&refs)
    )
}

pub fn format_search(keyword: &str, matches: &[&Transaction]) -> String {
    if matches.is_empty() {
        return "No matching transactions found.".to_string();
    }
    format!(
        "Search Results for \"{keyword}\" ({})\n{}",
        matches.len(),
        transaction_table(matches)
    )
}

pub fn format_expenses_over(threshold: f64, matches: &[&Transaction]) -> String {
    if matches.is_empty() {
        return "No expenses found above that amount.".to_string();
    }
    format!(
        "Expenses Over {}\n{}",
        money(threshold),
        transaction_table(matches)
    )
}

/// One line per month: "2024-01: #### ($47.00)".
pub fn format_chart(rows: &[MonthRow]) -> String {
    if rows.is_empty() {
        return "No expenses to show.".to_string();
    }
    let mut out = String::from("Monthly Spending");
    for row in rows {
        out.push_str(&format!(
            "\n{}: {} ({})",
            row.month,
            "#".repeat(row.units),
            money(row.total)
        ));
    }
    out
}
