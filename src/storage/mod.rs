//! Storage layer for Cashbook
//!
//! Provides JSON file storage with atomic writes and the ledger store
//! built on top of it.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json, write_json_atomic};
pub use ledger::{LedgerStore, LoadOutcome, Totals};
