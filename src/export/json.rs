//! JSON export
//!
//! Exports the complete ledger to JSON with schema versioning, and can
//! re-import an export for verification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{CashbookError, CashbookResult};
use crate::models::Transaction;
use crate::storage::{LedgerStore, Totals};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All transactions in stored order
    pub transactions: Vec<Transaction>,

    /// Aggregate totals at export time
    pub totals: Totals,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of transactions
    pub transaction_count: usize,

    /// Date of the earliest transaction
    pub earliest_transaction: Option<String>,

    /// Date of the latest transaction
    pub latest_transaction: Option<String>,
}

impl LedgerExport {
    /// Create a new full export from the store
    pub fn from_store(store: &LedgerStore) -> Self {
        let transactions = store.all();
        let totals = store.totals();

        let earliest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .min()
            .map(|d| d.to_string());

        let latest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .max()
            .map(|d| d.to_string());

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            earliest_transaction,
            latest_transaction,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            totals,
            metadata,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.metadata.transaction_count != self.transactions.len() {
            return Err(format!(
                "Metadata count {} does not match {} transactions",
                self.metadata.transaction_count,
                self.transactions.len()
            ));
        }

        // Ids must be unique and amounts non-negative magnitudes
        let mut seen = std::collections::HashSet::new();
        for txn in &self.transactions {
            if !seen.insert(txn.id) {
                return Err(format!("Duplicate transaction id: {}", txn.id));
            }
            if txn.amount.is_negative() {
                return Err(format!("Transaction {} has a negative amount", txn.id));
            }
        }

        if self.totals.balance != self.totals.income - self.totals.expense {
            return Err("Totals balance does not equal income minus expense".to_string());
        }

        Ok(())
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(
    store: &LedgerStore,
    writer: &mut W,
    pretty: bool,
) -> CashbookResult<()> {
    let export = LedgerExport::from_store(store);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| CashbookError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a JSON export (for verification/restore)
pub fn import_from_json(json_str: &str) -> CashbookResult<LedgerExport> {
    let export: LedgerExport =
        serde_json::from_str(json_str).map_err(|e| CashbookError::Export(e.to_string()))?;

    export.validate().map_err(CashbookError::Export)?;

    Ok(export)
}
