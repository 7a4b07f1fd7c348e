//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display.
//! Amounts are rendered with the configured currency symbol and dates with
//! the configured date format.

use crate::config::Settings;
use crate::models::Transaction;

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "{} {} {:24} {:12} {:8} {:>12}",
        txn.id,
        txn.date.format(&settings.date_format),
        truncate(&txn.description, 24),
        truncate(&txn.category, 12),
        txn.kind.to_string(),
        txn.signed_amount().format_with_symbol(&settings.currency_symbol)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:24} {:12} {:8} {:>12}\n",
        "Id", "Date", "Description", "Category", "Type", "Amount"
    ));
    output.push_str(&"-".repeat(84));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!(
        "Date:        {}\n",
        txn.date.format(&settings.date_format)
    ));
    output.push_str(&format!("Description: {}\n", txn.description));

    if txn.category.is_empty() {
        output.push_str("Category:    (uncategorized)\n");
    } else {
        output.push_str(&format!("Category:    {}\n", txn.category));
    }

    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.signed_amount().format_with_symbol(&settings.currency_symbol)
    ));

    output
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, Money, NewTransaction, TransactionId};
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        NewTransaction {
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            description: "Salary".to_string(),
            amount: Money::from_cents(100_000),
            category: "Work".to_string(),
            kind: EntryKind::Income,
        }
        .into_transaction(TransactionId::new())
    }

    #[test]
    fn test_format_transaction_row() {
        let txn = sample();
        let formatted = format_transaction_row(&txn, &Settings::default());

        assert!(formatted.contains("2024-01-05"));
        assert!(formatted.contains("Salary"));
        assert!(formatted.contains("$1000.00"));
        assert!(formatted.contains("Income"));
    }

    #[test]
    fn test_expense_row_is_negative() {
        let mut txn = sample();
        txn.kind = EntryKind::Expense;

        let formatted = format_transaction_row(&txn, &Settings::default());
        assert!(formatted.contains("-$1000.00"));
    }

    #[test]
    fn test_currency_symbol_from_settings() {
        let settings = Settings {
            currency_symbol: "€".to_string(),
            ..Default::default()
        };
        let formatted = format_transaction_row(&sample(), &settings);
        assert!(formatted.contains("€1000.00"));
    }

    #[test]
    fn test_format_empty_register() {
        let formatted = format_transaction_register(&[], &Settings::default());
        assert!(formatted.contains("No transactions found"));
    }

    #[test]
    fn test_format_register_has_header() {
        let formatted = format_transaction_register(&[sample()], &Settings::default());
        assert!(formatted.contains("Description"));
        assert!(formatted.contains("Salary"));
    }

    #[test]
    fn test_format_transaction_details() {
        let formatted = format_transaction_details(&sample(), &Settings::default());
        assert!(formatted.contains("Salary"));
        assert!(formatted.contains("Work"));
        assert!(formatted.contains("Income"));
        assert!(formatted.contains("$1000.00"));
    }

    #[test]
    fn test_details_uncategorized() {
        let mut txn = sample();
        txn.category = String::new();

        let formatted = format_transaction_details(&txn, &Settings::default());
        assert!(formatted.contains("(uncategorized)"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10).trim(), "Short");
        let result = truncate("A very long description here", 10);
        assert!(result.chars().count() <= 10);
        assert!(result.ends_with("..."));
    }
}
