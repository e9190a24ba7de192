//! The monitor event loop.
//!
//! # Responsibilities
//! - Probe the target once immediately, then on every tick
//! - Feed results into the accounting state
//! - Refresh the display after each probe
//! - Print the summary once when shutdown is signalled

use std::time::Duration;

use chrono::Local;
use tokio::sync::broadcast;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::config::{Attribution, MonitorConfig};
use crate::display::{StatusDisplay, StatusReport};
use crate::monitor::state::{MonitorState, Summary};
use crate::probe::{Probe, ProbeResult};

/// Periodically probes a target and keeps uptime/latency statistics.
pub struct Monitor<P, D> {
    probe: P,
    display: D,
    interval: Duration,
    attribution: Attribution,
}

impl<P: Probe, D: StatusDisplay> Monitor<P, D> {
    pub fn new(probe: P, display: D, config: &MonitorConfig) -> Self {
        Self {
            probe,
            display,
            // tokio intervals panic on a zero period
            interval: config.probe.interval().max(Duration::from_millis(1)),
            attribution: config.accounting.attribution,
        }
    }

    /// Run until `shutdown` fires, returning the final statistics.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) -> Summary {
        tracing::info!(
            url = %self.probe.target(),
            interval = ?self.interval,
            attribution = %self.attribution,
            "Monitor starting"
        );

        self.display.begin(self.probe.target());

        let initial = self.probe.probe().await;
        let started = Instant::now();
        let mut state = MonitorState::new(&initial, started, self.attribution);
        self.display.render(&report(&state, &initial, started));

        let mut ticker = time::interval_at(started + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.recv() => {
                    tracing::info!("Monitor received shutdown signal, exiting loop");
                    break;
                }
                _ = ticker.tick() => {
                    let result = self.probe.probe().await;
                    let now = Instant::now();
                    let outcome = state.record(&result, now);
                    tracing::debug!(
                        reachable = result.reachable,
                        elapsed = ?outcome.elapsed,
                        "Probe recorded"
                    );

                    if outcome.transitioned {
                        tracing::info!(
                            connected = result.reachable,
                            failure = ?result.failure,
                            "Connection status changed"
                        );
                    }

                    self.display.render(&report(&state, &result, now));
                }
            }
        }

        let now = Instant::now();
        let summary = state.close(now);
        tracing::info!(
            elapsed = ?state.elapsed_total(now),
            uptime_secs = summary.uptime.as_secs(),
            downtime_secs = summary.downtime.as_secs(),
            ticks = state.ticks(),
            "Monitor stopped"
        );
        self.display.finish(&summary);
        summary
    }
}

fn report(state: &MonitorState, result: &ProbeResult, now: Instant) -> StatusReport {
    StatusReport {
        timestamp: Local::now(),
        connected: state.is_connected(),
        in_state: state.time_in_state(now),
        latency: result.latency,
    }
}
