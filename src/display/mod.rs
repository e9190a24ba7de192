//! Status display subsystem.
//!
//! # Data Flow
//! ```text
//! Monitor
//!     → begin(target)        header once at startup
//!     → render(StatusReport) once per probe
//!     → finish(Summary)      restore terminal, print totals
//! ```
//!
//! # Design Decisions
//! - Rendering never fails the loop; write errors are swallowed
//! - terminal.rs redraws fixed rows in place, plain.rs appends lines
//! - format.rs holds the pure text formatting shared by both

pub mod format;
pub mod plain;
pub mod terminal;

use std::time::Duration;

use chrono::{DateTime, Local};

use crate::monitor::Summary;

pub use format::{format_duration, format_latency, summary_lines};
pub use plain::PlainDisplay;
pub use terminal::TerminalDisplay;

/// Everything a display needs to draw one status update.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    /// Wall-clock time of the probe.
    pub timestamp: DateTime<Local>,
    pub connected: bool,
    /// How long the current status has held.
    pub in_state: Duration,
    /// Latency of the probe that produced this report.
    pub latency: Option<Duration>,
}

impl StatusReport {
    /// Latency text, or `Unknown` when connected without a measurement.
    pub fn latency_text(&self) -> String {
        self.latency
            .map(format_latency)
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// A sink for status updates.
pub trait StatusDisplay {
    /// Draw the static header for `target`.
    fn begin(&mut self, target: &str);

    fn render(&mut self, report: &StatusReport);

    /// Restore the output device and print the final summary.
    fn finish(&mut self, summary: &Summary);
}

impl<D: StatusDisplay + ?Sized> StatusDisplay for Box<D> {
    fn begin(&mut self, target: &str) {
        (**self).begin(target)
    }

    fn render(&mut self, report: &StatusReport) {
        (**self).render(report)
    }

    fn finish(&mut self, summary: &Summary) {
        (**self).finish(summary)
    }
}
