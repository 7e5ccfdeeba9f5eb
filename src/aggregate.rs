use std::collections::HashMap;

use crate::parser::LogRecord;

/// Request times of a single URL, in file order.
pub type TimestampSeries = Vec<f64>;

#[derive(Debug, Default)]
pub struct Aggregator {
    series: HashMap<String, TimestampSeries>,
}

/// URLs that were requested often enough to have an interval.
#[derive(Debug, Default)]
pub struct Aggregated {
    pub series: HashMap<String, TimestampSeries>,
    pub dropped: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, record: LogRecord) {
        self.series
            .entry(record.url)
            .or_default()
            .push(record.timestamp);
    }

    pub fn url_count(&self) -> usize {
        self.series.len()
    }

    /// Hands over the collected series, minus URLs seen only once.
    pub fn finalize(self) -> Aggregated {
        let total = self.series.len();
        let series: HashMap<_, _> = self
            .series
            .into_iter()
            .filter(|(_, timestamps)| timestamps.len() >= 2)
            .collect();

        Aggregated {
            dropped: total - series.len(),
            series,
        }
    }
}
