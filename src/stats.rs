use serde::Serialize;

use crate::detector::BeaconResult;

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ScanStats {
    pub lines_read: u64,
    pub records_matched: u64,
    pub urls_seen: usize,
    pub urls_dropped_single: usize,
    pub first_seen: Option<f64>,
    pub last_seen: Option<f64>,
}

impl ScanStats {
    /// Widens the observed time window to include `timestamp`.
    pub fn record_timestamp(&mut self, timestamp: f64) {
        self.records_matched += 1;
        self.first_seen = Some(self.first_seen.map_or(timestamp, |t| t.min(timestamp)));
        self.last_seen = Some(self.last_seen.map_or(timestamp, |t| t.max(timestamp)));
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub interval: u32,
    pub min_count: u32,
    pub beacons: BeaconResult,
    pub stats: ScanStats,
}

impl ScanReport {
    /// Beacons ordered by count, highest first; ties by URL.
    pub fn ranked(&self) -> Vec<(&str, u32)> {
        let mut ranked: Vec<(&str, u32)> = self
            .beacons
            .iter()
            .map(|(url, count)| (url.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_window_tracks_extremes() {
        let mut stats = ScanStats::default();
        stats.record_timestamp(110.0);
        stats.record_timestamp(100.0);
        stats.record_timestamp(120.5);

        assert_eq!(stats.records_matched, 3);
        assert_eq!(stats.first_seen, Some(100.0));
        assert_eq!(stats.last_seen, Some(120.5));
    }

    #[test]
    fn ranked_orders_by_count_then_url() {
        let report = ScanReport {
            interval: 5,
            min_count: 1,
            beacons: BeaconResult::from([
                ("/b".to_string(), 2),
                ("/a".to_string(), 2),
                ("/c".to_string(), 7),
            ]),
            stats: ScanStats::default(),
        };

        assert_eq!(report.ranked(), vec![("/c", 7), ("/a", 2), ("/b", 2)]);
    }
}
