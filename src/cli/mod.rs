//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the ledger store. Input validation lives
//! here: the store trusts what it is given.

pub mod export;
pub mod report;
pub mod transaction;

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::{CashbookPaths, Settings};
use crate::error::CashbookResult;
use crate::storage::LedgerStore;

/// Ledger subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Record a new transaction
    Add {
        /// What the entry was for
        description: String,
        /// Non-negative amount (e.g. "1000" or "49.99")
        amount: String,
        /// Entry type: income or expense
        #[arg(short, long)]
        kind: String,
        /// Category label
        #[arg(short, long, default_value = "")]
        category: String,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Only show entries whose description or category contains this term
        #[arg(short, long)]
        search: Option<String>,
        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(short = 'D', long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New entry type: income or expense
        #[arg(short, long)]
        kind: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Delete every transaction
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Show income, expense and balance totals
    Summary,
    /// Export the ledger to CSV, JSON or YAML
    Export {
        /// Output format: csv, json or yaml
        #[arg(short, long, default_value = "csv")]
        format: String,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show current configuration and paths
    Config,
}

/// Dispatch a parsed command to its handler
pub fn handle_command(
    store: &mut LedgerStore,
    settings: &Settings,
    paths: &CashbookPaths,
    cmd: Commands,
) -> CashbookResult<()> {
    match cmd {
        Commands::Add {
            description,
            amount,
            kind,
            category,
            date,
        } => transaction::handle_add(store, settings, description, amount, kind, category, date),
        Commands::List { search, limit } => {
            transaction::handle_list(store, settings, search, limit)
        }
        Commands::Show { id } => transaction::handle_show(store, settings, &id),
        Commands::Edit {
            id,
            date,
            description,
            amount,
            category,
            kind,
        } => transaction::handle_edit(store, settings, &id, date, description, amount, category, kind),
        Commands::Delete { id, force } => transaction::handle_delete(store, settings, &id, force),
        Commands::Clear { force } => transaction::handle_clear(store, force),
        Commands::Summary => report::handle_summary(store, settings),
        Commands::Export { format, output } => export::handle_export(store, &format, output),
        Commands::Config => {
            println!("Cashbook Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            Ok(())
        }
    }
}
