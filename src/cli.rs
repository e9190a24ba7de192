//! Command-line interface.
//!
//! Flags are optional overrides layered on top of the defaults and the
//! optional config file.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::duration::parse_duration;
use crate::config::{Attribution, MonitorConfig};

#[derive(Debug, Parser)]
#[command(name = "connection-monitor")]
#[command(version, about = "Watch internet reachability and keep uptime/latency statistics", long_about = None)]
pub struct Cli {
    /// Interval between connection checks (e.g. 2s, 1m)
    #[arg(long, value_parser = parse_duration)]
    pub interval: Option<Duration>,

    /// URL to test connection against
    #[arg(long)]
    pub url: Option<String>,

    /// HTTP request timeout (e.g. 5s, 500ms)
    #[arg(long, value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// Credit elapsed time to the previous or the current status
    #[arg(long, value_name = "RULE")]
    pub attribute_to: Option<Attribution>,

    /// Print one line per check instead of redrawing in place
    #[arg(long)]
    pub plain: bool,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level for diagnostics written to stderr
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Apply the flags that were given on top of `config`.
    pub fn apply(&self, mut config: MonitorConfig) -> MonitorConfig {
        if let Some(interval) = self.interval {
            config.probe.interval_ms = duration_ms(interval);
        }
        if let Some(url) = &self.url {
            config.probe.url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.probe.timeout_ms = duration_ms(timeout);
        }
        if let Some(rule) = self.attribute_to {
            config.accounting.attribution = rule;
        }
        if self.plain {
            config.display.plain = true;
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
        config
    }
}

/// Whole milliseconds, rounding sub-millisecond remainders up.
fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_nanos().div_ceil(1_000_000)).unwrap_or(u64::MAX)
}
