//! Transaction model
//!
//! A transaction records a single income or expense entry: a date, a
//! description, a non-negative amount, a free-text category, and the entry
//! kind that determines the amount's direction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl EntryKind {
    /// Parse a kind from user input, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A single ledger entry
///
/// `amount` is always a non-negative magnitude; direction comes from `kind`.
/// The upstream caller validates input before constructing one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned by the store at creation
    pub id: TransactionId,

    /// Calendar date of the entry
    pub date: NaiveDate,

    /// What the entry was for
    pub description: String,

    /// Non-negative magnitude; sign is derived from `kind`
    pub amount: Money,

    /// Free-text category label
    #[serde(default)]
    pub category: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl Transaction {
    /// The amount with its direction applied: income positive, expense negative
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            EntryKind::Income => self.amount,
            EntryKind::Expense => -self.amount,
        }
    }

    /// Check if this entry is income
    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    /// Check if this entry is an expense
    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }

    /// Case-insensitive substring match against description or category
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.description.to_lowercase().contains(needle_lower)
            || self.category.to_lowercase().contains(needle_lower)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount()
        )
    }
}

/// A candidate entry, not yet stored and therefore without an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub kind: EntryKind,
}

impl NewTransaction {
    /// Turn the candidate into a stored record with the given id
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            date: self.date,
            description: self.description,
            amount: self.amount,
            category: self.category,
            kind: self.kind,
        }
    }
}

/// A partial update: present fields overwrite, absent fields are kept
///
/// The id is not part of the patch, so it can never be overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionPatch {
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub kind: Option<EntryKind>,
}

impl TransactionPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the patch changes anything at all
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.description.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.kind.is_none()
    }

    /// Overlay the patch onto a record, yielding a new record value
    pub fn apply(&self, target: &Transaction) -> Transaction {
        Transaction {
            id: target.id,
            date: self.date.unwrap_or(target.date),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| target.description.clone()),
            amount: self.amount.unwrap_or(target.amount),
            category: self
                .category
                .clone()
                .unwrap_or_else(|| target.category.clone()),
            kind: self.kind.unwrap_or(target.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_transaction() -> Transaction {
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
    fn test_kind_display() {
        assert_eq!(EntryKind::Income.to_string(), "Income");
        assert_eq!(EntryKind::Expense.to_string(), "Expense");
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(EntryKind::parse("income"), Some(EntryKind::Income));
        assert_eq!(EntryKind::parse("Expense"), Some(EntryKind::Expense));
        assert_eq!(EntryKind::parse("  INCOME "), Some(EntryKind::Income));
        assert_eq!(EntryKind::parse("transfer"), None);
    }

    #[test]
    fn test_signed_amount() {
        let mut txn = sample_transaction();
        assert_eq!(txn.signed_amount(), Money::from_cents(100_000));

        txn.kind = EntryKind::Expense;
        assert_eq!(txn.signed_amount(), Money::from_cents(-100_000));
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let txn = sample_transaction();
        assert!(txn.matches("sal"));
        assert!(txn.matches("work"));
        assert!(!txn.matches("rent"));
    }

    #[test]
    fn test_into_transaction_keeps_fields() {
        let id = TransactionId::new();
        let candidate = NewTransaction {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            description: "Rent".to_string(),
            amount: Money::from_cents(40_000),
            category: "Housing".to_string(),
            kind: EntryKind::Expense,
        };

        let txn = candidate.clone().into_transaction(id);
        assert_eq!(txn.id, id);
        assert_eq!(txn.date, candidate.date);
        assert_eq!(txn.description, candidate.description);
        assert_eq!(txn.amount, candidate.amount);
        assert_eq!(txn.category, candidate.category);
        assert_eq!(txn.kind, candidate.kind);
    }

    #[test]
    fn test_patch_empty() {
        assert!(TransactionPatch::new().is_empty());

        let patch = TransactionPatch {
            amount: Some(Money::from_cents(1)),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_patch_overlays_only_present_fields() {
        let txn = sample_transaction();
        let patch = TransactionPatch {
            amount: Some(Money::from_cents(123_456)),
            ..Default::default()
        };

        let updated = patch.apply(&txn);
        assert_eq!(updated.id, txn.id);
        assert_eq!(updated.amount, Money::from_cents(123_456));
        assert_eq!(updated.date, txn.date);
        assert_eq!(updated.description, txn.description);
        assert_eq!(updated.category, txn.category);
        assert_eq!(updated.kind, txn.kind);
    }

    #[test]
    fn test_patch_full_overlay() {
        let txn = sample_transaction();
        let patch = TransactionPatch {
            date: NaiveDate::from_ymd_opt(2024, 2, 1),
            description: Some("Bonus".to_string()),
            amount: Some(Money::from_cents(50_000)),
            category: Some("Extra".to_string()),
            kind: Some(EntryKind::Income),
        };

        let updated = patch.apply(&txn);
        assert_eq!(updated.id, txn.id);
        assert_eq!(updated.description, "Bonus");
        assert_eq!(updated.category, "Extra");
        assert_eq!(updated.date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn test_serialization_field_names() {
        let txn = sample_transaction();
        let json = serde_json::to_string(&txn).unwrap();

        // The wire format uses "type" for the kind field
        assert!(json.contains("\"type\":\"income\""));
        assert!(json.contains("\"description\":\"Salary\""));
        assert!(json.contains("\"category\":\"Work\""));
        assert!(json.contains("\"date\":\"2024-01-05\""));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let txn = sample_transaction();
        let json = serde_json::to_string(&txn).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }
}
