//! Line-oriented output for pipes, logs and dumb terminals.

use std::io::{self, Write};

use crate::display::{format_duration, summary_lines, StatusDisplay, StatusReport};
use crate::monitor::Summary;

/// Appends one line per status update, without escape sequences.
pub struct PlainDisplay<W: Write> {
    out: W,
}

impl PlainDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> PlainDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line).and_then(|_| self.out.flush()) {
            tracing::debug!(error = %e, "Failed to write status line");
        }
    }
}

/// Render a report as a single line.
pub fn status_line(report: &StatusReport) -> String {
    let mut line = format!(
        "[{}] {}",
        report.timestamp.format("%H:%M:%S"),
        if report.connected { "CONNECTED" } else { "DISCONNECTED" }
    );
    if !report.in_state.is_zero() {
        line.push_str(&format!(" duration={}", format_duration(report.in_state)));
    }
    if report.connected {
        line.push_str(&format!(" latency={}", report.latency_text()));
    }
    line
}

impl<W: Write> StatusDisplay for PlainDisplay<W> {
    fn begin(&mut self, target: &str) {
        self.write_line(&format!("Testing connection to: {} (Ctrl+C to exit)", target));
    }

    fn render(&mut self, report: &StatusReport) {
        self.write_line(&status_line(report));
    }

    fn finish(&mut self, summary: &Summary) {
        for line in summary_lines(summary) {
            self.write_line(&line);
        }
    }
}
