//! The ledger store
//!
//! Owns the ordered collection of transactions, mirrors it to a JSON file,
//! and exposes create/read/update/delete, text search, date-sorted views,
//! and aggregate totals. Every mutation persists synchronously before it
//! returns, so each observable state change is immediately durable.

use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::CashbookResult;
use crate::models::{
    IdGenerator, Money, NewTransaction, Transaction, TransactionId, TransactionPatch,
    UuidIdGenerator,
};

use super::file_io::{read_json, write_json_atomic};

/// How constructing a store went
///
/// Absent or unreadable data degrades to an empty collection instead of
/// failing the caller; this records which path was taken so callers and
/// tests can observe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The ledger file existed and parsed; holds the record count
    Loaded(usize),
    /// No ledger file yet
    StartedEmpty,
    /// The ledger file was unreadable or malformed; collection reset to empty
    ResetCorrupt,
}

/// Aggregate sums over the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of amounts over income entries
    pub income: Money,
    /// Sum of amounts over expense entries
    pub expense: Money,
    /// `income - expense`
    pub balance: Money,
}

/// Store for ledger transactions, persisted as a JSON array
///
/// Stored order is insertion order; sorted views are derived and never
/// mutate it. Callers get owned clones, never references into the store.
pub struct LedgerStore {
    path: PathBuf,
    transactions: Vec<Transaction>,
    ids: Box<dyn IdGenerator>,
    outcome: LoadOutcome,
}

impl LedgerStore {
    /// Open the store at `path` with random ids
    pub fn open(path: PathBuf) -> Self {
        Self::open_with_ids(path, Box::new(UuidIdGenerator))
    }

    /// Open the store at `path` with an injected id source
    ///
    /// Never fails: a missing file starts the collection empty, and an
    /// unreadable one resets it to empty with a logged warning.
    pub fn open_with_ids(path: PathBuf, ids: Box<dyn IdGenerator>) -> Self {
        let (transactions, outcome) = match read_json::<Vec<Transaction>, _>(&path) {
            Ok(Some(transactions)) => {
                let count = transactions.len();
                (transactions, LoadOutcome::Loaded(count))
            }
            Ok(None) => (Vec::new(), LoadOutcome::StartedEmpty),
            Err(e) => {
                warn!(
                    "Ledger file {} is unreadable, starting with an empty ledger: {}",
                    path.display(),
                    e
                );
                (Vec::new(), LoadOutcome::ResetCorrupt)
            }
        };

        Self {
            path,
            transactions,
            ids,
            outcome,
        }
    }

    /// How the last load went
    pub fn outcome(&self) -> LoadOutcome {
        self.outcome
    }

    /// Number of stored transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the ledger is empty
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// All transactions in stored (insertion) order
    pub fn all(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// Record a new transaction
    ///
    /// Assigns a fresh id, appends, persists, and returns the stored record.
    /// Input validation is the caller's concern.
    pub fn add(&mut self, candidate: NewTransaction) -> CashbookResult<Transaction> {
        let txn = candidate.into_transaction(self.ids.next_id());
        self.transactions.push(txn.clone());
        self.persist()?;
        Ok(txn)
    }

    /// Get a transaction by id
    pub fn get(&self, id: TransactionId) -> Option<Transaction> {
        self.transactions.iter().find(|t| t.id == id).cloned()
    }

    /// Resolve a transaction from a full UUID or its short display form
    pub fn find(&self, identifier: &str) -> Option<Transaction> {
        if let Ok(id) = identifier.parse::<TransactionId>() {
            return self.get(id);
        }

        let needle = identifier.strip_prefix("txn-").unwrap_or(identifier);
        self.transactions
            .iter()
            .find(|t| t.id.as_uuid().to_string().starts_with(needle))
            .cloned()
    }

    /// Overlay a patch onto the transaction with the given id
    ///
    /// Returns `Ok(None)` without writing when no record matches. Otherwise
    /// the patched record replaces the old one in the same position, the
    /// collection is persisted, and the updated record is returned.
    pub fn update(
        &mut self,
        id: TransactionId,
        patch: TransactionPatch,
    ) -> CashbookResult<Option<Transaction>> {
        let Some(index) = self.transactions.iter().position(|t| t.id == id) else {
            return Ok(None);
        };

        let updated = patch.apply(&self.transactions[index]);
        self.transactions[index] = updated.clone();
        self.persist()?;
        Ok(Some(updated))
    }

    /// Delete the transaction with the given id
    ///
    /// Returns whether a removal occurred. A miss performs no write.
    pub fn delete(&mut self, id: TransactionId) -> CashbookResult<bool> {
        let Some(index) = self.transactions.iter().position(|t| t.id == id) else {
            return Ok(false);
        };

        self.transactions.remove(index);
        self.persist()?;
        Ok(true)
    }

    /// Remove every transaction
    pub fn clear_all(&mut self) -> CashbookResult<()> {
        self.transactions.clear();
        self.persist()
    }

    /// Transactions whose description or category contains the term,
    /// case-insensitively
    pub fn filter(&self, search_term: &str) -> Vec<Transaction> {
        let needle = search_term.to_lowercase();
        self.transactions
            .iter()
            .filter(|t| t.matches(&needle))
            .cloned()
            .collect()
    }

    /// The full collection ordered by date descending
    ///
    /// The sort is stable: entries with equal dates keep their stored
    /// relative order. Stored order itself is untouched.
    pub fn sorted_by_date_desc(&self) -> Vec<Transaction> {
        let mut sorted = self.transactions.clone();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// Aggregate income, expense, and balance over the collection
    pub fn totals(&self) -> Totals {
        let income: Money = self
            .transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum();

        let expense: Money = self
            .transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();

        Totals {
            income,
            expense,
            balance: income - expense,
        }
    }

    fn persist(&self) -> CashbookResult<()> {
        write_json_atomic(&self.path, &self.transactions)
    }
}
