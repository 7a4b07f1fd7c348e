use anyhow::Result;
use clap::Parser;

use cashbook::cli::{self, Commands};
use cashbook::config::{paths::CashbookPaths, settings::Settings};
use cashbook::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "cashbook",
    version,
    about = "Command-line personal finance ledger",
    long_about = "Cashbook is a command-line personal finance ledger. It records \
                  income and expense entries in a local JSON file, with search, \
                  running totals, and spreadsheet export."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Initialize paths, settings and the ledger store
    let paths = CashbookPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    let mut store = LedgerStore::open(paths.ledger_file());

    match cli.command {
        Some(command) => cli::handle_command(&mut store, &settings, &paths, command)?,
        None => {
            println!("Cashbook - Command-line personal finance ledger");
            println!();
            println!("Run 'cashbook --help' for usage information.");
            println!("Run 'cashbook add \"Coffee\" 4.50 --kind expense' to record an entry.");
        }
    }

    Ok(())
}
