//! Connectivity accounting.
//!
//! # States
//! - Connected: last probe reached the target
//! - Disconnected: last probe failed
//!
//! # Accounting
//! ```text
//! every tick:   elapsed = now - status_change_time
//!               elapsed → uptime or downtime (per Attribution)
//!               status_change_time = now
//! on change:    state_since = now
//! on shutdown:  close out the open interval with the last status
//! ```

use std::time::Duration;

use tokio::time::Instant;

use crate::config::Attribution;
use crate::probe::ProbeResult;

/// Running latency aggregates over successful probes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatencyStats {
    min: Option<Duration>,
    max: Duration,
    total: Duration,
    count: u64,
}

impl LatencyStats {
    pub fn record(&mut self, sample: Duration) {
        self.min = Some(self.min.map_or(sample, |min| min.min(sample)));
        self.max = self.max.max(sample);
        self.total += sample;
        self.count += 1;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn min(&self) -> Option<Duration> {
        self.min
    }

    pub fn max(&self) -> Option<Duration> {
        (self.count > 0).then_some(self.max)
    }

    pub fn average(&self) -> Option<Duration> {
        if self.count == 0 {
            return None;
        }
        let nanos = self.total.as_nanos() / u128::from(self.count);
        Some(Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX)))
    }

    /// Min/max/average, if any sample was recorded.
    pub fn summary(&self) -> Option<LatencySummary> {
        Some(LatencySummary {
            min: self.min?,
            max: self.max()?,
            avg: self.average()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencySummary {
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
}

/// Final statistics printed on exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub uptime: Duration,
    pub downtime: Duration,
    pub latency: Option<LatencySummary>,
}

/// What changed on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Time since the previous tick.
    pub elapsed: Duration,
    /// Whether the status flipped on this tick.
    pub transitioned: bool,
}

/// Accounting state for the lifetime of the monitor.
#[derive(Debug, Clone)]
pub struct MonitorState {
    attribution: Attribution,
    last_status: bool,
    status_change_time: Instant,
    state_since: Instant,
    started: Instant,
    uptime: Duration,
    downtime: Duration,
    latency: LatencyStats,
    ticks: u64,
}

impl MonitorState {
    /// Seed the state from the initial probe.
    pub fn new(initial: &ProbeResult, now: Instant, attribution: Attribution) -> Self {
        let mut latency = LatencyStats::default();
        if let Some(sample) = initial.sample() {
            latency.record(sample);
        }

        Self {
            attribution,
            last_status: initial.reachable,
            status_change_time: now,
            state_since: now,
            started: now,
            uptime: Duration::ZERO,
            downtime: Duration::ZERO,
            latency,
            ticks: 0,
        }
    }

    /// Account one tick's probe result observed at `now`.
    pub fn record(&mut self, result: &ProbeResult, now: Instant) -> TickOutcome {
        let elapsed = now.saturating_duration_since(self.status_change_time);
        let credited = match self.attribution {
            Attribution::Previous => self.last_status,
            Attribution::Current => result.reachable,
        };
        self.credit(credited, elapsed);
        self.status_change_time = now;

        let transitioned = result.reachable != self.last_status;
        if transitioned {
            self.state_since = now;
            self.last_status = result.reachable;
        }

        if let Some(sample) = result.sample() {
            self.latency.record(sample);
        }

        self.ticks += 1;
        TickOutcome {
            elapsed,
            transitioned,
        }
    }

    /// Close out the interval since the last tick using the last known status.
    pub fn close(&mut self, now: Instant) -> Summary {
        let elapsed = now.saturating_duration_since(self.status_change_time);
        self.credit(self.last_status, elapsed);
        self.status_change_time = now;
        self.summary()
    }

    fn credit(&mut self, connected: bool, elapsed: Duration) {
        if connected {
            self.uptime += elapsed;
        } else {
            self.downtime += elapsed;
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            uptime: self.uptime,
            downtime: self.downtime,
            latency: self.latency.summary(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.last_status
    }

    /// How long the current status has held as of `now`.
    pub fn time_in_state(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.state_since)
    }

    pub fn uptime(&self) -> Duration {
        self.uptime
    }

    pub fn downtime(&self) -> Duration {
        self.downtime
    }

    /// Time since the initial probe.
    pub fn elapsed_total(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    pub fn latency(&self) -> &LatencyStats {
        &self.latency
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
