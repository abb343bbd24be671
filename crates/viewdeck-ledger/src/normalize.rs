//! Normalization of raw ledger transactions into
//! [`viewdeck_core::TransactionRecord`]s.
//!
//! Unlike the sheet-side row normalizer, a malformed amount here is fatal
//! for the whole project's ingestion: money that fails to parse is a
//! data-integrity problem, not a typo to paper over with zero.

use std::str::FromStr;

use rust_decimal::Decimal;
use viewdeck_core::{TransactionKind, TransactionRecord};

use crate::error::LedgerError;
use crate::types::RawTransaction;

/// Maximum description length kept on a normalized transaction.
const DESCRIPTION_MAX_CHARS: usize = 80;

/// Parses the upstream `amount` value, which may be a JSON number or a
/// decimal string.
fn parse_amount(raw: &serde_json::Value) -> Option<Decimal> {
    let text = match raw {
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.trim().to_owned(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// Truncates to the first 80 characters, collapses newlines to single
/// spaces, and trims — in that order, so a newline past the cutoff can
/// never pull later text into the kept prefix.
fn clean_description(raw: &str) -> String {
    let truncated: String = raw.chars().take(DESCRIPTION_MAX_CHARS).collect();
    truncated.replace('\n', " ").trim().to_owned()
}

/// Normalizes one raw ledger transaction.
///
/// # Errors
///
/// Returns [`LedgerError::InvalidAmount`] if the amount cannot be parsed
/// as a decimal.
pub fn normalize_transaction(raw: &RawTransaction) -> Result<TransactionRecord, LedgerError> {
    let amount = parse_amount(&raw.amount).ok_or_else(|| LedgerError::InvalidAmount {
        date: raw.date_iso.clone(),
        raw: raw.amount.to_string(),
    })?;

    Ok(TransactionRecord {
        date: raw.date_iso.clone(),
        kind: TransactionKind::from(raw.type_code),
        category: raw.category.name.clone(),
        amount,
        description: clean_description(&raw.description),
    })
}

/// Normalizes a batch of raw transactions and sorts them by date ascending.
///
/// The sort is stable, so same-day transactions keep their upstream order.
///
/// # Errors
///
/// Returns the first [`LedgerError::InvalidAmount`] encountered; the whole
/// batch is rejected rather than partially ingested.
pub fn ingest(raws: &[RawTransaction]) -> Result<Vec<TransactionRecord>, LedgerError> {
    let mut records = raws
        .iter()
        .map(normalize_transaction)
        .collect::<Result<Vec<_>, _>>()?;
    records.sort_by(|a, b| a.date.cmp(&b.date));
    Ok(records)
}

/// Sum of all income amounts. Unknown-kind transactions are not counted.
#[must_use]
pub fn income_total(records: &[TransactionRecord]) -> Decimal {
    records
        .iter()
        .filter(|t| t.kind == TransactionKind::Income)
        .map(|t| t.amount)
        .sum()
}

/// Sum of all expense amounts. Unknown-kind transactions are not counted.
#[must_use]
pub fn expense_total(records: &[TransactionRecord]) -> Decimal {
    records
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| t.amount)
        .sum()
}
