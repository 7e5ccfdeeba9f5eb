//! Exact-interval beacon detection.
//!
//! For each request time of a URL we look back in time for the nearest earlier
//! request that happened exactly `interval` whole seconds before it. Every
//! request that has such a predecessor counts as one beacon tick. Deltas are
//! truncated to whole seconds, so `interval + 0.9` is still not a match.

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use tracing::debug;

use crate::aggregate::TimestampSeries;

/// Suspicious URLs and their beacon counts, ordered by URL.
pub type BeaconResult = BTreeMap<String, u32>;

/// Counts the timestamps in `sorted_desc` (newest first) that have an earlier
/// timestamp exactly `interval` seconds behind them.
pub fn count_intervals(sorted_desc: &[f64], interval: u32) -> u32 {
    let interval = i64::from(interval);
    let mut count = 0;

    let last = sorted_desc.len().saturating_sub(1);

    for (i, &current) in sorted_desc.iter().enumerate().take(last) {
        for &earlier in &sorted_desc[i..] {
            let delta = (current - earlier).trunc() as i64;

            if delta == interval {
                count += 1;
                break;
            }
            // Deltas only grow from here.
            if delta > interval {
                break;
            }
        }
    }

    count
}

/// Sorts a series newest first and counts its beacon ticks.
pub fn beacon_count(mut timestamps: TimestampSeries, interval: u32) -> u32 {
    timestamps.sort_by(|a, b| b.total_cmp(a));
    count_intervals(&timestamps, interval)
}

/// Keeps the URLs with at least `min_count` beacon ticks.
pub fn detect(
    series: HashMap<String, TimestampSeries>,
    interval: u32,
    min_count: u32,
) -> BeaconResult {
    let start_time = Instant::now();
    let candidates = series.len();

    let beacons: BeaconResult = series
        .into_iter()
        .filter(|(_, timestamps)| timestamps.len() >= 2)
        .filter_map(|(url, timestamps)| {
            let count = beacon_count(timestamps, interval);
            (count >= min_count).then_some((url, count))
        })
        .collect();

    debug!(
        action = "complete",
        component = "interval_detection",
        candidates,
        flagged = beacons.len(),
        interval,
        min_count,
        duration_ms = start_time.elapsed().as_millis(),
        "Interval detection completed"
    );

    beacons
}
