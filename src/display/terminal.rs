//! In-place terminal view.
//!
//! # Layout
//! ```text
//! row 0  Internet Connection Monitor
//! row 1  Testing connection to: <url>
//! row 2  Press Ctrl+C to exit
//! row 3  ----------------------------
//! row 4  [HH:MM:SS] ✓ CONNECTED    Duration: 1m 5s
//! row 6  Network Latency: 23ms          (connected only)
//! ```

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};

use crate::display::{format_duration, summary_lines, StatusDisplay, StatusReport};
use crate::monitor::Summary;

const STATUS_ROW: u16 = 4;
const LATENCY_ROW: u16 = 6;

/// Redraws fixed rows of the terminal with ANSI escape sequences.
pub struct TerminalDisplay<W: Write> {
    out: W,
    cursor_hidden: bool,
}

impl TerminalDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            cursor_hidden: false,
        }
    }

    fn write_header(&mut self, target: &str) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0), Hide)?;
        self.cursor_hidden = true;
        queue!(
            self.out,
            Print("Internet Connection Monitor\n"),
            Print(format!("Testing connection to: {}\n", target)),
            Print("Press Ctrl+C to exit\n"),
            Print("----------------------------\n"),
        )?;
        self.out.flush()
    }

    fn write_status(&mut self, report: &StatusReport) -> io::Result<()> {
        let time = report.timestamp.format("%H:%M:%S");
        queue!(self.out, MoveTo(0, STATUS_ROW), Clear(ClearType::CurrentLine))?;

        if report.connected {
            let text = format!("[{}] ✓ CONNECTED    ", time);
            queue!(self.out, PrintStyledContent(text.green().bold()))?;
        } else {
            let text = format!("[{}] ✗ DISCONNECTED ", time);
            queue!(self.out, PrintStyledContent(text.red().bold()))?;
        }

        if !report.in_state.is_zero() {
            let text = format!("Duration: {}", format_duration(report.in_state));
            queue!(self.out, PrintStyledContent(text.cyan()))?;
        }

        queue!(self.out, MoveTo(0, LATENCY_ROW), Clear(ClearType::CurrentLine))?;
        if report.connected {
            queue!(
                self.out,
                Print(format!("Network Latency: {}", report.latency_text()))
            )?;
        }

        self.out.flush()
    }

    fn write_summary(&mut self, summary: &Summary) -> io::Result<()> {
        queue!(self.out, MoveTo(0, LATENCY_ROW + 1), Show)?;
        self.cursor_hidden = false;
        queue!(self.out, Print("\n"))?;
        for line in summary_lines(summary) {
            queue!(self.out, Print(line), Print("\n"))?;
        }
        self.out.flush()
    }

    fn restore_cursor(&mut self) {
        if self.cursor_hidden {
            let _ = execute!(self.out, Show);
            self.cursor_hidden = false;
        }
    }
}

impl<W: Write> StatusDisplay for TerminalDisplay<W> {
    fn begin(&mut self, target: &str) {
        if let Err(e) = self.write_header(target) {
            tracing::debug!(error = %e, "Failed to draw header");
        }
    }

    fn render(&mut self, report: &StatusReport) {
        if let Err(e) = self.write_status(report) {
            tracing::debug!(error = %e, "Failed to draw status");
        }
    }

    fn finish(&mut self, summary: &Summary) {
        if let Err(e) = self.write_summary(summary) {
            tracing::debug!(error = %e, "Failed to print summary");
        }
    }
}

impl<W: Write> Drop for TerminalDisplay<W> {
    fn drop(&mut self) {
        self.restore_cursor();
    }
}
