//! Normalization from raw sheet rows to [`viewdeck_core::ChannelRecord`].
//!
//! Tracking sheets are edited by hand: columns move around, numbers carry
//! locale formatting, and summary rows sit between channel rows. The
//! normalizer is tolerant of all of it — rows without a recognized
//! platform are skipped, and malformed counters silently become zero. A
//! collect run must never die on a typo in a cell.

use std::collections::HashMap;

use viewdeck_core::{ChannelRecord, Platform};

/// Parses a locale-formatted counter cell into a non-negative integer.
///
/// Strips ASCII spaces and non-breaking spaces, maps a comma decimal
/// separator to a dot, parses as a float, and truncates toward zero.
/// Anything that still fails to parse — `"n/a"`, an empty cell, a
/// thousands-grouped value with multiple commas — defaults to 0. This
/// default-to-zero contract absorbs malformed upstream data instead of
/// failing the run; a missing data point reads as "no views counted".
#[must_use]
pub fn parse_metric(raw: &str) -> u64 {
    let cleaned: String = raw
        .chars()
        .filter(|&c| c != ' ' && c != '\u{a0}')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => {
            // Truncate toward zero; counters large enough to lose precision
            // in f64 do not occur in practice.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                value.trunc() as u64
            }
        }
        _ => 0,
    }
}

/// Normalizes one raw sheet row into a [`ChannelRecord`].
///
/// Header names are matched case-insensitively after trimming; when the
/// same header appears twice, the rightmost column wins. Cells missing at
/// the end of the row read as empty strings. Returns `None` when the
/// `social_network` cell is not a recognized platform — header rows,
/// summary rows, and channels on untracked platforms all fall out here.
#[must_use]
pub fn normalize_row(header: &[String], row: &[String]) -> Option<ChannelRecord> {
    let mut fields: HashMap<String, &str> = HashMap::new();
    for (i, name) in header.iter().enumerate() {
        let value = row.get(i).map_or("", String::as_str);
        fields.insert(name.trim().to_lowercase(), value);
    }

    let platform = Platform::parse(fields.get("social_network").copied().unwrap_or(""))?;

    Some(ChannelRecord {
        platform,
        channel_url: fields
            .get("channel_url")
            .copied()
            .unwrap_or("")
            .trim()
            .to_owned(),
        total_videos: parse_metric(fields.get("total_videos").copied().unwrap_or("")),
        total_views: parse_metric(fields.get("total_views").copied().unwrap_or("")),
    })
}

/// Parses a full tab into channel records.
///
/// The first row is the header; empty row-sets and empty rows are
/// skipped. Rows the normalizer rejects are silently dropped.
#[must_use]
pub fn parse_channels(rows: &[Vec<String>]) -> Vec<ChannelRecord> {
    let Some((header, body)) = rows.split_first() else {
        return Vec::new();
    };

    body.iter()
        .filter(|row| !row.is_empty())
        .filter_map(|row| normalize_row(header, row))
        .collect()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
