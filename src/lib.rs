pub mod aggregate;
pub mod args;
pub mod config;
pub mod detector;
pub mod parser;
pub mod report;
pub mod scan;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use config::{ClientFilter, Config};
pub use detector::{count_intervals, BeaconResult};
pub use parser::{parse_line, LogRecord};
pub use scan::{scan, scan_file};
pub use stats::{ScanReport, ScanStats};
