mod cli;
mod error;
mod fmt;
mod models;
mod reports;
mod store;
mod tracker;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli::menu::run(&cli.data_file) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
