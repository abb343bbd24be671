//! Snapshot aggregation and the delta engine.
//!
//! Both operations are pure: aggregation folds channel records into
//! per-platform totals, and the delta engine rewrites the `delta` fields of
//! an ordered snapshot sequence in place. Re-running either on identical
//! input reproduces identical output — no state is carried between runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::metrics::{ChannelRecord, DailySnapshot, Platform};

#[derive(Debug, Error)]
pub enum SeriesError {
    /// Two tabs in one run carried the same date label (e.g. a duplicated
    /// or renamed tab). Aggregating both would double-count, so the whole
    /// project's series is rejected rather than silently picking one.
    #[error("duplicate date label in series: {label}")]
    DuplicateLabel { label: String },
}

/// Totals produced by [`aggregate`] before delta computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotTotals {
    pub total_views: u64,
    pub by_platform: BTreeMap<Platform, u64>,
    pub channel_count: usize,
}

/// Sums views across `records` into overall and per-platform totals.
///
/// Every recognized platform is present in `by_platform` even when no
/// record mentions it, so downstream delta computation never needs to
/// guard missing keys. `channel_count` counts the records as given; the
/// row normalizer has already discarded unrecognized-platform rows.
#[must_use]
pub fn aggregate(records: &[ChannelRecord]) -> SnapshotTotals {
    let mut by_platform: BTreeMap<Platform, u64> =
        Platform::ALL.iter().map(|&p| (p, 0u64)).collect();
    let mut total_views = 0u64;

    for record in records {
        let entry = by_platform.entry(record.platform).or_insert(0);
        *entry = entry.saturating_add(record.total_views);
        total_views = total_views.saturating_add(record.total_views);
    }

    SnapshotTotals {
        total_views,
        by_platform,
        channel_count: records.len(),
    }
}

impl DailySnapshot {
    /// Builds a snapshot for one labeled day from its channel records.
    ///
    /// Deltas start at zero; [`compute_deltas`] fills them in once the
    /// full series is assembled.
    #[must_use]
    pub fn from_records(label: impl Into<String>, records: &[ChannelRecord]) -> Self {
        let totals = aggregate(records);
        let delta_by_platform = Platform::ALL.iter().map(|&p| (p, 0u64)).collect();
        DailySnapshot {
            label: label.into(),
            total_views: totals.total_views,
            by_platform: totals.by_platform,
            channel_count: totals.channel_count,
            delta: 0,
            delta_by_platform,
        }
    }
}

/// Populates `delta` and `delta_by_platform` across an ordered sequence.
///
/// The first snapshot is treated as the entire-history baseline: its delta
/// equals its totals. Every later snapshot gets the clamped-at-zero
/// difference from its predecessor. Upstream counters are cumulative and
/// expected to be non-decreasing, but corrections and partial scrapes do
/// produce regressions; the clamp discards the magnitude of a regression
/// instead of letting negative deltas corrupt downstream sums.
///
/// `snapshots` must already be sorted by label ascending.
pub fn compute_deltas(snapshots: &mut [DailySnapshot]) {
    for i in 0..snapshots.len() {
        if i == 0 {
            snapshots[0].delta = snapshots[0].total_views;
            snapshots[0].delta_by_platform = snapshots[0].by_platform.clone();
            continue;
        }
        let prev_total = snapshots[i - 1].total_views;
        let prev_by_platform = snapshots[i - 1].by_platform.clone();

        let current = &mut snapshots[i];
        current.delta = current.total_views.saturating_sub(prev_total);
        current.delta_by_platform = current
            .by_platform
            .iter()
            .map(|(&platform, &views)| {
                let prev = prev_by_platform.get(&platform).copied().unwrap_or(0);
                (platform, views.saturating_sub(prev))
            })
            .collect();
    }
}

/// An ordered sequence of daily snapshots for one project.
///
/// Labels are strictly increasing; construction rejects duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectSeries {
    snapshots: Vec<DailySnapshot>,
}

impl ProjectSeries {
    /// Assembles a series: sorts by label ascending, rejects duplicate
    /// labels, and runs the delta engine.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::DuplicateLabel`] if two snapshots share a
    /// label.
    pub fn from_snapshots(mut snapshots: Vec<DailySnapshot>) -> Result<Self, SeriesError> {
        snapshots.sort_by(|a, b| a.label.cmp(&b.label));
        for pair in snapshots.windows(2) {
            if pair[0].label == pair[1].label {
                return Err(SeriesError::DuplicateLabel {
                    label: pair[0].label.clone(),
                });
            }
        }
        compute_deltas(&mut snapshots);
        Ok(ProjectSeries { snapshots })
    }

    #[must_use]
    pub fn snapshots(&self) -> &[DailySnapshot] {
        &self.snapshots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The most recent snapshot, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&DailySnapshot> {
        self.snapshots.last()
    }
}
