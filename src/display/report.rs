//! Summary display formatting

use crate::config::Settings;
use crate::storage::Totals;

/// Format the aggregate totals as a short summary block
pub fn format_summary(totals: &Totals, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;

    let mut output = String::new();
    output.push_str("Summary\n");
    output.push_str(&"-".repeat(30));
    output.push('\n');
    output.push_str(&format!(
        "{:15} {:>14}\n",
        "Total Income:",
        totals.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:15} {:>14}\n",
        "Total Expense:",
        totals.expense.format_with_symbol(symbol)
    ));
    output.push_str(&"-".repeat(30));
    output.push('\n');
    output.push_str(&format!(
        "{:15} {:>14}\n",
        "Balance:",
        totals.balance.format_with_symbol(symbol)
    ));

    output
}
