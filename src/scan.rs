use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::aggregate::Aggregator;
use crate::config::Config;
use crate::detector;
use crate::parser;
use crate::stats::{ScanReport, ScanStats};

/// Runs one pass over `reader` and reports the beaconing URLs of the configured client.
///
/// Lines that don't parse, or belong to other clients, are skipped. A failed
/// read aborts the whole scan.
pub fn scan<R: BufRead>(reader: R, config: &Config) -> Result<ScanReport> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "log_scan",
        interval = config.interval,
        min_count = config.min_count,
        "Scanning access log"
    );

    let mut stats = ScanStats::default();
    let mut aggregator = Aggregator::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read log line {}", line_num + 1))?;
        stats.lines_read += 1;

        if let Some(record) = parser::parse_line(&line, &config.client) {
            stats.record_timestamp(record.timestamp);
            aggregator.observe(record);
        }
    }

    stats.urls_seen = aggregator.url_count();
    let aggregated = aggregator.finalize();
    stats.urls_dropped_single = aggregated.dropped;

    info!(
        action = "aggregate",
        component = "log_scan",
        lines_read = stats.lines_read,
        records_matched = stats.records_matched,
        urls_seen = stats.urls_seen,
        urls_dropped_single = stats.urls_dropped_single,
        duration_ms = start_time.elapsed().as_millis(),
        "Aggregated client requests"
    );

    let beacons = detector::detect(aggregated.series, config.interval, config.min_count);

    info!(
        action = "complete",
        component = "log_scan",
        flagged = beacons.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Scan completed"
    );

    Ok(ScanReport {
        interval: config.interval,
        min_count: config.min_count,
        beacons,
        stats,
    })
}

/// Opens the access log at `path` and scans it.
pub fn scan_file(path: &Path, config: &Config) -> Result<ScanReport> {
    info!(action = "open", component = "log_file", file_path = ?path, "Opening access log");

    let file = File::open(path).with_context(|| {
        format!(
            "Error opening file {} (Did you make a typo?)",
            path.display()
        )
    })?;

    scan(BufReader::new(file), config)
}

pub fn scan_stdin(config: &Config) -> Result<ScanReport> {
    info!(action = "open", component = "log_file", file_path = "-", "Reading access log from stdin");
    scan(io::stdin().lock(), config)
}
