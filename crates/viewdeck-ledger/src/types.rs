//! Ledger API response types.
//!
//! ## Observed shape from the live transactions endpoint
//!
//! - `type` is an integer code: `1` income, `2` expense. Other codes have
//!   been seen on transfer-like records and are passed through.
//! - `amount` is usually a JSON number but arrives as a decimal string on
//!   some accounts; both are accepted and resolved during normalization.
//! - `description` may be absent, empty, or multi-line.

use serde::Deserialize;

/// Top-level response from `GET /transactions?project=<id>`.
#[derive(Debug, Deserialize)]
pub struct TransactionsResponse {
    #[serde(default)]
    pub transactions: Vec<RawTransaction>,
}

/// A single transaction as delivered by the ledger API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTransaction {
    /// ISO `YYYY-MM-DD` date of the transaction.
    #[serde(rename = "dateIso")]
    pub date_iso: String,

    /// Integer kind code; `1` income, `2` expense, anything else preserved.
    #[serde(rename = "type")]
    pub type_code: i64,

    pub category: RawCategory,

    /// JSON number or decimal string; parsed during normalization.
    pub amount: serde_json::Value,

    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    pub name: String,
}
