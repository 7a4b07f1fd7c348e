//! Cashbook - Command-line personal finance ledger
//!
//! This library provides the core functionality for the Cashbook ledger
//! application: a single ordered collection of income and expense records,
//! persisted as JSON, with search, date-sorted views, aggregate totals,
//! and spreadsheet export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, money, ids)
//! - `storage`: JSON file storage layer and the ledger store
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal formatting helpers
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use cashbook::config::{paths::CashbookPaths, settings::Settings};
//! use cashbook::storage::LedgerStore;
//!
//! let paths = CashbookPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut store = LedgerStore::open(paths.ledger_file());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;

pub use error::CashbookError;
