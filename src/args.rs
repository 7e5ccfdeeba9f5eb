use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_INTERVAL, DEFAULT_MIN_COUNT};

#[derive(Parser, Debug)]
#[command(
    name = "squidsift",
    about = "Search for beacon traffic in Squid access.log files",
    version,
    long_about = None
)]
pub struct Args {
    /// Look for beacons from CLIENT
    #[arg(value_name = "CLIENT")]
    pub client: String,

    /// The Squid access.log file to parse ("-" reads stdin)
    #[arg(value_name = "FILE")]
    pub log_file: PathBuf,

    /// The interval (in seconds) to consider a possible beacon
    #[arg(short, long, value_name = "SECS", default_value_t = DEFAULT_INTERVAL)]
    pub interval: u32,

    /// The minimum number of beacons to consider a URL as suspicious
    #[arg(short = 'c', long, value_name = "NUM", default_value_t = DEFAULT_MIN_COUNT)]
    pub min_count: u32,

    /// Treat CLIENT as a regular expression matched against the whole client field
    #[arg(long)]
    pub regex: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Print scan statistics after the report
    #[arg(long)]
    pub summary: bool,

    /// Number of suspicious URLs to display
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn reads_stdin(&self) -> bool {
        self.log_file.as_os_str() == "-"
    }
}
