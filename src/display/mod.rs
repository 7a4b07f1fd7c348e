//! Terminal display formatting for Cashbook
//!
//! Pure formatting helpers: everything here takes query results and returns
//! strings, with no store access and no I/O.

pub mod report;
pub mod transaction;

pub use report::format_summary;
pub use transaction::{
    format_transaction_details, format_transaction_register, format_transaction_row,
};
