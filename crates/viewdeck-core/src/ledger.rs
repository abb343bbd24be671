//! Financial ledger domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Classification of a ledger transaction.
///
/// The upstream API encodes the kind as an integer: `1` is income, `2` is
/// expense. Any other code is preserved as-is rather than rejected —
/// income/expense totals simply don't count it. Serialization keeps the
/// raw integer so persisted documents match the upstream representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum TransactionKind {
    Income,
    Expense,
    Other(i64),
}

impl From<i64> for TransactionKind {
    fn from(code: i64) -> Self {
        match code {
            1 => TransactionKind::Income,
            2 => TransactionKind::Expense,
            other => TransactionKind::Other(other),
        }
    }
}

impl From<TransactionKind> for i64 {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => 1,
            TransactionKind::Expense => 2,
            TransactionKind::Other(code) => code,
        }
    }
}

/// One normalized ledger transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// ISO date string (`YYYY-MM-DD`); ordering is lexicographic, which
    /// coincides with chronological order for this format.
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Decimal,
    /// First 80 characters of the upstream description, newlines collapsed
    /// to a single space, trimmed.
    pub description: String,
}

/// The ordered transaction history for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLedger {
    pub updated_at: String,
    pub transactions: Vec<TransactionRecord>,
}
