//! Transaction CLI commands
//!
//! Parses and validates user input before anything reaches the store; the
//! store itself does not re-validate.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::transaction::{
    format_transaction_details, format_transaction_register, format_transaction_row,
};
use crate::error::{CashbookError, CashbookResult};
use crate::models::{EntryKind, Money, NewTransaction, TransactionPatch};
use crate::storage::LedgerStore;

/// Parse and validate an amount: numeric and non-negative
fn parse_amount(input: &str) -> CashbookResult<Money> {
    let amount = Money::parse(input).map_err(|e| {
        CashbookError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '49.99' or '100'. Error: {}",
            input, e
        ))
    })?;

    if amount.is_negative() {
        return Err(CashbookError::Validation(format!(
            "Amount must be non-negative: '{}'. Use --kind expense for money going out",
            input
        )));
    }

    Ok(amount)
}

/// Parse a date, defaulting to today when absent
fn parse_date(input: Option<String>) -> CashbookResult<NaiveDate> {
    match input {
        Some(date_str) => NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
            CashbookError::Validation(format!(
                "Invalid date format: '{}'. Use YYYY-MM-DD",
                date_str
            ))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parse an entry kind
fn parse_kind(input: &str) -> CashbookResult<EntryKind> {
    EntryKind::parse(input).ok_or_else(|| {
        CashbookError::Validation(format!(
            "Invalid type: '{}'. Use income or expense",
            input
        ))
    })
}

/// Validate a description: must not be blank
fn parse_description(input: String) -> CashbookResult<String> {
    let trimmed = input.trim().to_string();
    if trimmed.is_empty() {
        return Err(CashbookError::Validation(
            "Description must not be empty".into(),
        ));
    }
    Ok(trimmed)
}

/// Handle `cashbook add`
pub fn handle_add(
    store: &mut LedgerStore,
    settings: &Settings,
    description: String,
    amount: String,
    kind: String,
    category: String,
    date: Option<String>,
) -> CashbookResult<()> {
    let candidate = NewTransaction {
        date: parse_date(date)?,
        description: parse_description(description)?,
        amount: parse_amount(&amount)?,
        category: category.trim().to_string(),
        kind: parse_kind(&kind)?,
    };

    let txn = store.add(candidate)?;

    println!("Recorded transaction:");
    print!("{}", format_transaction_details(&txn, settings));
    Ok(())
}

/// Handle `cashbook list`
pub fn handle_list(
    store: &LedgerStore,
    settings: &Settings,
    search: Option<String>,
    limit: Option<usize>,
) -> CashbookResult<()> {
    // Blank search term means no filtering at all
    let mut transactions = match search.as_deref() {
        Some(term) if !term.trim().is_empty() => {
            let mut matched = store.filter(term);
            matched.sort_by(|a, b| b.date.cmp(&a.date));
            matched
        }
        _ => store.sorted_by_date_desc(),
    };

    if let Some(limit) = limit {
        transactions.truncate(limit);
    }

    print!("{}", format_transaction_register(&transactions, settings));
    println!("\nShowing {} of {} transactions", transactions.len(), store.len());
    Ok(())
}

/// Handle `cashbook show`
pub fn handle_show(store: &LedgerStore, settings: &Settings, id: &str) -> CashbookResult<()> {
    let txn = store
        .find(id)
        .ok_or_else(|| CashbookError::transaction_not_found(id))?;

    print!("{}", format_transaction_details(&txn, settings));
    Ok(())
}

/// Handle `cashbook edit`
#[allow(clippy::too_many_arguments)]
pub fn handle_edit(
    store: &mut LedgerStore,
    settings: &Settings,
    id: &str,
    date: Option<String>,
    description: Option<String>,
    amount: Option<String>,
    category: Option<String>,
    kind: Option<String>,
) -> CashbookResult<()> {
    let txn = store
        .find(id)
        .ok_or_else(|| CashbookError::transaction_not_found(id))?;

    let patch = TransactionPatch {
        date: date.map(|d| parse_date(Some(d))).transpose()?,
        description: description.map(parse_description).transpose()?,
        amount: amount.map(|a| parse_amount(&a)).transpose()?,
        category: category.map(|c| c.trim().to_string()),
        kind: kind.map(|k| parse_kind(&k)).transpose()?,
    };

    if patch.is_empty() {
        return Err(CashbookError::Validation(
            "Nothing to change: pass at least one of --date, --description, --amount, --category, --kind".into(),
        ));
    }

    let updated = store
        .update(txn.id, patch)?
        .ok_or_else(|| CashbookError::transaction_not_found(id))?;

    println!("Updated transaction:");
    print!("{}", format_transaction_details(&updated, settings));
    Ok(())
}

/// Handle `cashbook delete`
pub fn handle_delete(
    store: &mut LedgerStore,
    settings: &Settings,
    id: &str,
    force: bool,
) -> CashbookResult<()> {
    let txn = store
        .find(id)
        .ok_or_else(|| CashbookError::transaction_not_found(id))?;

    if !force {
        println!("About to delete transaction:");
        println!("  {}", format_transaction_row(&txn, settings).trim_end());
        println!();
        println!("Use --force to confirm deletion");
        return Ok(());
    }

    store.delete(txn.id)?;
    println!("Deleted transaction: {} ({})", txn.id, txn.description);
    Ok(())
}

/// Handle `cashbook clear`
pub fn handle_clear(store: &mut LedgerStore, force: bool) -> CashbookResult<()> {
    if store.is_empty() {
        println!("The ledger is already empty.");
        return Ok(());
    }

    if !force {
        println!(
            "About to delete ALL {} transactions. This cannot be undone.",
            store.len()
        );
        println!("Use --force to confirm");
        return Ok(());
    }

    let count = store.len();
    store.clear_all()?;
    println!("Deleted {} transactions.", count);
    Ok(())
}
