//! Summary CLI command

use crate::config::Settings;
use crate::display::format_summary;
use crate::error::CashbookResult;
use crate::storage::LedgerStore;

/// Handle `cashbook summary`
pub fn handle_summary(store: &LedgerStore, settings: &Settings) -> CashbookResult<()> {
    print!("{}", format_summary(&store.totals(), settings));
    println!("\n{} transactions recorded", store.len());
    Ok(())
}
