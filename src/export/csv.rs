//! CSV export
//!
//! Produces a spreadsheet-readable register: one row per transaction with
//! the signed amount (income positive, expense negative), followed by a
//! summary block with the aggregate totals. Pure formatting over the
//! store's query outputs.

use std::io::Write;

use crate::error::{CashbookError, CashbookResult};
use crate::models::Transaction;
use crate::storage::Totals;

/// Write the transaction register and summary block as CSV
///
/// `transactions` is written in the order given; callers pass the
/// date-descending view.
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    totals: &Totals,
    writer: W,
) -> CashbookResult<()> {
    // Summary rows are shorter than register rows
    let mut csv = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    csv.write_record(["Date", "Description", "Category", "Type", "Amount"])
        .map_err(|e| CashbookError::Export(e.to_string()))?;

    for txn in transactions {
        csv.write_record([
            txn.date.format("%Y-%m-%d").to_string(),
            txn.description.clone(),
            txn.category.clone(),
            txn.kind.to_string(),
            format!("{:.2}", txn.signed_amount().to_decimal()),
        ])
        .map_err(|e| CashbookError::Export(e.to_string()))?;
    }

    csv.write_record([""])
        .map_err(|e| CashbookError::Export(e.to_string()))?;
    csv.write_record(["Summary"])
        .map_err(|e| CashbookError::Export(e.to_string()))?;
    csv.write_record([
        "Total Income".to_string(),
        format!("{:.2}", totals.income.to_decimal()),
    ])
    .map_err(|e| CashbookError::Export(e.to_string()))?;
    csv.write_record([
        "Total Expense".to_string(),
        format!("{:.2}", totals.expense.to_decimal()),
    ])
    .map_err(|e| CashbookError::Export(e.to_string()))?;
    csv.write_record([
        "Balance".to_string(),
        format!("{:.2}", totals.balance.to_decimal()),
    ])
    .map_err(|e| CashbookError::Export(e.to_string()))?;

    csv.flush()
        .map_err(|e| CashbookError::Export(e.to_string()))?;

    Ok(())
}
