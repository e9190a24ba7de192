//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the monitor.
//! All types derive Serde traits for deserialization from config files.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default probe target.
pub const DEFAULT_URL: &str = "https://www.google.com";

/// Default polling period in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 2_000;

/// Default per-request deadline in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Root configuration for the connection monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct MonitorConfig {
    /// Probe target and timing.
    pub probe: ProbeConfig,

    /// Uptime/downtime accounting settings.
    pub accounting: AccountingConfig,

    /// Output settings.
    pub display: DisplayConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProbeConfig {
    /// URL requested on every tick.
    pub url: String,

    /// Polling period in milliseconds.
    pub interval_ms: u64,

    /// Per-request deadline in milliseconds.
    pub timeout_ms: u64,
}

impl ProbeConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            interval_ms: DEFAULT_INTERVAL_MS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Which status the time between two ticks is credited to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Attribution {
    /// The status that was current during the interval just ended.
    #[default]
    Previous,
    /// The status observed by the probe that closes the interval.
    Current,
}

impl FromStr for Attribution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "previous" => Ok(Attribution::Previous),
            "current" => Ok(Attribution::Current),
            other => Err(format!(
                "unknown attribution '{}', expected 'previous' or 'current'",
                other
            )),
        }
    }
}

impl fmt::Display for Attribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribution::Previous => write!(f, "previous"),
            Attribution::Current => write!(f, "current"),
        }
    }
}

/// Accounting configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AccountingConfig {
    /// Elapsed-time attribution rule.
    pub attribution: Attribution,
}

/// Display configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Print one line per tick instead of redrawing in place.
    pub plain: bool,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}
