//! Export CLI command

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::{CashbookError, CashbookResult};
use crate::export::{export_full_json, export_full_yaml, export_transactions_csv};
use crate::storage::LedgerStore;

/// Handle `cashbook export`
pub fn handle_export(
    store: &LedgerStore,
    format: &str,
    output: Option<PathBuf>,
) -> CashbookResult<()> {
    let mut writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(File::create(path).map_err(|e| {
            CashbookError::Export(format!("Failed to create {}: {}", path.display(), e))
        })?),
        None => Box::new(io::stdout()),
    };

    match format.to_lowercase().as_str() {
        "csv" => {
            export_transactions_csv(&store.sorted_by_date_desc(), &store.totals(), &mut writer)?
        }
        "json" => export_full_json(store, &mut writer, true)?,
        "yaml" => export_full_yaml(store, &mut writer)?,
        other => {
            return Err(CashbookError::Validation(format!(
                "Invalid format: '{}'. Use csv, json or yaml",
                other
            )))
        }
    }

    writer
        .flush()
        .map_err(|e| CashbookError::Export(e.to_string()))?;

    if let Some(path) = output {
        eprintln!(
            "Exported {} transactions to {}",
            store.len(),
            path.display()
        );
    }

    Ok(())
}
