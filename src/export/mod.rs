//! Export module for Cashbook
//!
//! Provides ledger export functionality in multiple formats:
//! - CSV: Transaction register plus totals summary (spreadsheet-compatible)
//! - JSON: Machine-readable full ledger export
//! - YAML: Human-readable full ledger export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_transactions_csv;
pub use json::{export_full_json, import_from_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
