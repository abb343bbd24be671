//! Tab-title classification.
//!
//! A tab belongs to the time series when its title begins with a
//! `YYYY-MM-DD` date. Everything else — summary tabs, notes, channel
//! rosters — is metadata and never reaches the delta engine.

use chrono::NaiveDate;

use crate::types::SheetInfo;

/// Returns `true` when `title` (after trimming) begins with a
/// calendar-valid `YYYY-MM-DD` date.
#[must_use]
pub fn is_date_label(title: &str) -> bool {
    let trimmed = title.trim();
    if trimmed.len() < 10 || !trimmed.is_char_boundary(10) {
        return false;
    }
    NaiveDate::parse_from_str(&trimmed[..10], "%Y-%m-%d").is_ok()
}

/// Splits tabs into date-labeled ones (sorted by title ascending) and the
/// rest (original order preserved).
///
/// Lexicographic order on `YYYY-MM-DD` prefixes coincides with
/// chronological order, which is what the delta engine requires.
#[must_use]
pub fn partition_date_tabs(sheets: Vec<SheetInfo>) -> (Vec<SheetInfo>, Vec<SheetInfo>) {
    let (mut dated, other): (Vec<_>, Vec<_>) =
        sheets.into_iter().partition(|s| is_date_label(&s.title));
    dated.sort_by(|a, b| a.title.cmp(&b.title));
    (dated, other)
}
