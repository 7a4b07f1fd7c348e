//! Transaction identifiers and id generation
//!
//! The newtype wrapper keeps transaction ids distinct from raw UUIDs, and
//! the `IdGenerator` trait lets callers inject a deterministic source
//! instead of depending on randomness (or the wall clock) for uniqueness.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a ledger transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an ID from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// The short form shown to users: "txn-" plus the first 8 hex chars
    pub fn short(&self) -> String {
        format!("txn-{}", &self.0.to_string()[..8])
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short())
    }
}

impl From<Uuid> for TransactionId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Try to parse the full UUID
        if let Ok(uuid) = Uuid::parse_str(s) {
            return Ok(Self(uuid));
        }
        // Try stripping the display prefix
        let s = s.strip_prefix("txn-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Source of fresh transaction ids
///
/// The store pulls every new id through this seam, so tests and scripts can
/// swap the random default for a deterministic sequence.
pub trait IdGenerator {
    /// Produce the next unique id
    fn next_id(&mut self) -> TransactionId;
}

/// Default generator: random v4 UUIDs
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> TransactionId {
        TransactionId::new()
    }
}

/// Deterministic generator: a monotonically increasing counter
///
/// Ids are unique and ordered, which keeps test assertions stable.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: u128,
}

impl SequentialIdGenerator {
    /// Create a generator starting at 1
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Create a generator starting at a specific counter value
    pub fn starting_at(next: u128) -> Self {
        Self { next }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> TransactionId {
        let id = TransactionId::from_uuid(Uuid::from_u128(self.next));
        self.next += 1;
        id
    }
}
