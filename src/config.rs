use anyhow::{Context, Result};
use regex::Regex;

use crate::args::Args;

pub const DEFAULT_INTERVAL: u32 = 5;
pub const DEFAULT_MIN_COUNT: u32 = 10;

/// Decides whether a log line's client field belongs to the client under investigation.
#[derive(Debug, Clone)]
pub enum ClientFilter {
    Literal(String),
    Pattern(Regex),
}

impl ClientFilter {
    pub fn literal(client: impl Into<String>) -> Self {
        Self::Literal(client.into())
    }

    /// Compiles `pattern` so that it has to match the whole client field.
    pub fn pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{})$", pattern))
            .with_context(|| format!("Invalid client pattern '{}'", pattern))?;
        Ok(Self::Pattern(regex))
    }

    pub fn matches(&self, client: &str) -> bool {
        match self {
            Self::Literal(expected) => client == expected,
            Self::Pattern(regex) => regex.is_match(client),
        }
    }
}

/// Detection parameters, fixed for the whole scan.
#[derive(Debug, Clone)]
pub struct Config {
    pub client: ClientFilter,
    pub interval: u32,
    pub min_count: u32,
}

impl Config {
    pub fn new(client: ClientFilter, interval: u32, min_count: u32) -> Result<Self> {
        if interval == 0 {
            anyhow::bail!("--interval must be greater than 0");
        }
        if min_count == 0 {
            anyhow::bail!("--min-count must be greater than 0");
        }

        Ok(Self {
            client,
            interval,
            min_count,
        })
    }

    pub fn from_args(args: &Args) -> Result<Self> {
        let client = if args.regex {
            ClientFilter::pattern(&args.client)?
        } else {
            ClientFilter::literal(args.client.as_str())
        };

        Self::new(client, args.interval, args.min_count)
    }
}
