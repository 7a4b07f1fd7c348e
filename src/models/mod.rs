//! Core data models for Cashbook
//!
//! This module contains the data structures that represent the ledger
//! domain: transactions, monetary amounts, and identifiers.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::{IdGenerator, SequentialIdGenerator, TransactionId, UuidIdGenerator};
pub use money::Money;
pub use transaction::{EntryKind, NewTransaction, Transaction, TransactionPatch};
