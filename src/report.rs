use anyhow::{Context, Result};
use std::fmt::Write;

use crate::stats::ScanReport;
use crate::utils::{format_number, format_timestamp};

pub fn render_text(report: &ScanReport, top: Option<usize>) -> String {
    let mut out = String::new();

    if report.beacons.is_empty() {
        let _ = writeln!(
            out,
            "No sites with at least {} intervals at {} seconds",
            report.min_count, report.interval
        );
        return out;
    }

    let _ = writeln!(
        out,
        "Sites that had at least {} {}-second intervals",
        report.min_count, report.interval
    );

    let ranked = report.ranked();
    let limit = top.unwrap_or(ranked.len());
    for (url, count) in ranked.iter().take(limit) {
        let _ = writeln!(out, "{:5} - {}", count, url);
    }

    if limit < ranked.len() {
        let _ = writeln!(out, "... and {} more", ranked.len() - limit);
    }

    out
}

pub fn render_summary(report: &ScanReport) -> String {
    let stats = &report.stats;
    let mut out = String::new();

    let _ = writeln!(out, "\n--- Scan Summary ---");
    let _ = writeln!(out, "Lines read: {}", format_number(stats.lines_read));
    let _ = writeln!(
        out,
        "Requests from client: {}",
        format_number(stats.records_matched)
    );
    let _ = writeln!(out, "URLs requested: {}", format_number(stats.urls_seen as u64));
    let _ = writeln!(
        out,
        "URLs requested only once: {}",
        format_number(stats.urls_dropped_single as u64)
    );

    if let (Some(first), Some(last)) = (stats.first_seen, stats.last_seen) {
        let _ = writeln!(
            out,
            "Time window: {} to {}",
            format_timestamp(first),
            format_timestamp(last)
        );
    }

    out
}

pub fn render_json(report: &ScanReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize scan report")
}
