use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::cli::{render, MenuChoice};
use crate::error::Result;
use crate::models::{normalize_category, parse_amount, parse_date, parse_threshold, Transaction};
use crate::reports;
use crate::store::LoadOutcome;
use crate::tracker::Tracker;

pub fn run(data_file: &str) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_loop(data_file, &mut input)
}

fn run_loop(data_file: &str, input: &mut impl BufRead) -> Result<()> {
    let (mut tracker, outcome) = Tracker::open(data_file)?;
    match outcome {
        LoadOutcome::Loaded(count) => println!("Loaded {count} transactions from {data_file}."),
        LoadOutcome::Corrupted => println!(
            "{}",
            format!("Could not read {data_file}: file may be corrupted. Starting with an empty register.")
                .yellow()
        ),
        LoadOutcome::Missing => {}
    }

    loop {
        print_menu();
        let Some(line) = prompt(input, "Choose an option: ")? else {
            // stdin closed; leave without saving
            break;
        };
        match MenuChoice::from_input(&line) {
            Some(MenuChoice::Add) => {
                if let Some(tx) = prompt_transaction(input)? {
                    tracker.add(tx);
                    println!("{}", "Transaction added.".green());
                }
            }
            Some(MenuChoice::View) => {
                println!("\n{}", render::format_register(tracker.transactions()));
            }
            Some(MenuChoice::Search) => {
                let Some(keyword) = prompt(input, "Search keyword in description: ")? else {
                    break;
                };
                println!(
                    "\n{}",
                    render::format_search(&keyword, &tracker.search(&keyword))
                );
            }
            Some(MenuChoice::Filter) => {
                let Some(threshold) = prompt_threshold(input)? else {
                    break;
                };
                println!(
                    "\n{}",
                    render::format_expenses_over(threshold, &tracker.expenses_over(threshold))
                );
            }
            Some(MenuChoice::Sort) => {
                tracker.sort_by_date();
                println!("{}", "Transactions sorted by date.".green());
            }
            Some(MenuChoice::Chart) => {
                println!(
                    "\n{}",
                    render::format_chart(&reports::monthly_spending(tracker.transactions()))
                );
            }
            Some(MenuChoice::SaveExit) => {
                tracker.save()?;
                println!("Data saved to {}.", tracker.data_file().display());
                println!("Goodbye.");
                break;
            }
            None => println!("{}", "Invalid choice. Please select 1-7.".yellow()),
        }
    }
    Ok(())
}

fn print_menu() {
    println!("\n{}", "Personal Finance Tracker".bold());
    for (i, choice) in MenuChoice::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, choice.label());
    }
}

/// Read one line, trimmed. `None` means stdin reached EOF.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt(input: &mut impl BufRead, label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    read_line(input)
}

/// Interactive entry for one transaction. Date and amount re-prompt until
/// valid; category is normalized, description taken as-is. `None` means
/// input ran out mid-entry and nothing was added.
fn prompt_transaction(input: &mut impl BufRead) -> Result<Option<Transaction>> {
    println!("\n--- Add Transaction ---");
    let date = loop {
        let Some(raw) = prompt(input, "Date (YYYY-MM-DD): ")? else {
            return Ok(None);
        };
        match parse_date(&raw) {
            Ok(date) => break date,
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    };
    let Some(raw_category) = prompt(input, "Category (Income/Expense): ")? else {
        return Ok(None);
    };
    let category = normalize_category(&raw_category);
    let Some(description) = prompt(input, "Description: ")? else {
        return Ok(None);
    };
    let amount = loop {
        let Some(raw) = prompt(input, "Amount: ")? else {
            return Ok(None);
        };
        match parse_amount(&raw) {
            Ok(amount) => break amount,
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    };
    Ok(Some(Transaction::new(date, category, description, amount)))
}

fn prompt_threshold(input: &mut impl BufRead) -> Result<Option<f64>> {
    loop {
        let Some(raw) = prompt(input, "Show expenses over: $")? else {
            return Ok(None);
        };
        match parse_threshold(&raw) {
            Ok(threshold) => return Ok(Some(threshold)),
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    }
}
