//! Channel and snapshot domain types.
//!
//! ## Observed shape from live tracking spreadsheets
//!
//! Each date-labeled tab carries one row per tracked channel with a
//! `social_network` column plus cumulative `total_videos` / `total_views`
//! counters. Sheets legitimately contain header, summary, and notes rows
//! whose `social_network` cell is empty or free text — those are filtered,
//! not errors. Counter cells arrive in whatever locale the sheet editor
//! used (`"1 234,50"`, non-breaking spaces included), so numeric parsing
//! lives in `viewdeck-sheets` and is deliberately tolerant.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A recognized social-content platform.
///
/// Rows with any other platform value are discarded during row
/// normalization rather than rejected as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Platform {
    Instagram,
    Tiktok,
    Youtube,
}

impl Platform {
    /// All recognized platforms, in serialization order.
    pub const ALL: [Platform; 3] = [Platform::Instagram, Platform::Tiktok, Platform::Youtube];

    /// Parses a raw cell value into a platform.
    ///
    /// The value is trimmed and uppercased before matching. Returns `None`
    /// for anything outside the recognized set.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "INSTAGRAM" => Some(Platform::Instagram),
            "TIKTOK" => Some(Platform::Tiktok),
            "YOUTUBE" => Some(Platform::Youtube),
            _ => None,
        }
    }

    /// The canonical uppercase name, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Instagram => "INSTAGRAM",
            Platform::Tiktok => "TIKTOK",
            Platform::Youtube => "YOUTUBE",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tracked channel as of a single labeled day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRecord {
    pub platform: Platform,
    pub channel_url: String,
    pub total_videos: u64,
    pub total_views: u64,
}

/// Aggregated totals for one project on one labeled day.
///
/// `by_platform` and `delta_by_platform` always carry all three recognized
/// platforms, so consumers never need to guard missing keys. Snapshots are
/// immutable once deltas have been computed; a full collect run re-derives
/// every snapshot from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySnapshot {
    /// The `YYYY-MM-DD` tab title this snapshot was built from.
    pub label: String,
    pub total_views: u64,
    pub by_platform: BTreeMap<Platform, u64>,
    pub channel_count: usize,
    pub delta: u64,
    pub delta_by_platform: BTreeMap<Platform, u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognized_platforms() {
        assert_eq!(Platform::parse("INSTAGRAM"), Some(Platform::Instagram));
        assert_eq!(Platform::parse("tiktok"), Some(Platform::Tiktok));
        assert_eq!(Platform::parse("  YouTube "), Some(Platform::Youtube));
    }

    #[test]
    fn parse_unrecognized_platform_is_none() {
        assert_eq!(Platform::parse("FACEBOOK"), None);
        assert_eq!(Platform::parse(""), None);
        assert_eq!(Platform::parse("итого"), None);
    }

    #[test]
    fn platform_serializes_uppercase() {
        let json = serde_json::to_string(&Platform::Tiktok).unwrap();
        assert_eq!(json, "\"TIKTOK\"");
    }

    #[test]
    fn platform_works_as_map_key() {
        let mut map = BTreeMap::new();
        map.insert(Platform::Youtube, 7u64);
        map.insert(Platform::Instagram, 3u64);
        let json = serde_json::to_string(&map).unwrap();
        // BTreeMap ordering keeps serialization deterministic.
        assert_eq!(json, "{\"INSTAGRAM\":3,\"YOUTUBE\":7}");
    }
}
