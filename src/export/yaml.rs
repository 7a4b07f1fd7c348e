//! YAML export
//!
//! Human-readable full ledger export, sharing the JSON export structure.

use std::io::Write;

use crate::error::{CashbookError, CashbookResult};
use crate::storage::LedgerStore;

use super::json::LedgerExport;

/// Export the full ledger to YAML
pub fn export_full_yaml<W: Write>(store: &LedgerStore, writer: &mut W) -> CashbookResult<()> {
    let export = LedgerExport::from_store(store);

    serde_yaml::to_writer(writer, &export).map_err(|e| CashbookError::Export(e.to_string()))?;

    Ok(())
}
