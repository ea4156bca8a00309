pub mod menu;
pub mod render;

use clap::Parser;

use crate::store::DEFAULT_DATA_FILE;

#[derive(Parser)]
#[command(
    name = "tally",
    about = "Personal finance tracker: record transactions, search and filter them, chart monthly spending."
)]
pub struct Cli {
    /// Path to the transactions JSON file
    #[arg(long = "data-file", default_value = DEFAULT_DATA_FILE)]
    pub data_file: String,
}

/// The menu surface, one entry per numbered choice in display order.
/// Dispatch goes through this enum so the command set is closed and the
/// match in the menu loop is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Search,
    Filter,
    Sort,
    Chart,
    SaveExit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Add,
        MenuChoice::View,
        MenuChoice::Search,
        MenuChoice::Filter,
        MenuChoice::Sort,
        MenuChoice::Chart,
        MenuChoice::SaveExit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Transaction",
            MenuChoice::View => "View Transactions",
            MenuChoice::Search => "Search Transactions",
            MenuChoice::Filter => "Filter Expenses Over Amount",
            MenuChoice::Sort => "Sort Transactions by Date",
            MenuChoice::Chart => "Monthly Spending Chart",
            MenuChoice::SaveExit => "Save & Exit",
        }
    }

    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::View),
            "3" => Some(MenuChoice::Search),
            "4" => Some(MenuChoice::Filter),
            "5" => Some(MenuChoice::Sort),
            "6" => Some(MenuChoice::Chart),
            "7" => Some(MenuChoice::SaveExit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_maps_all_choices() {
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            assert_eq!(MenuChoice::from_input(&(i + 1).to_string()), Some(*choice));
        }
    }

    #[test]
    fn test_from_input_rejects_everything_else() {
        assert_eq!(MenuChoice::from_input("0"), None);
        assert_eq!(MenuChoice::from_input("8"), None);
        assert_eq!(MenuChoice::from_input("add"), None);
        assert_eq!(MenuChoice::from_input(""), None);
    }

    #[test]
    fn test_from_input_trims_whitespace() {
        assert_eq!(MenuChoice::from_input(" 7 \n"), Some(MenuChoice::SaveExit));
    }
}
