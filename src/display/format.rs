//! Text formatting for durations, latencies and the exit summary.

use std::time::Duration;

use crate::monitor::Summary;

/// Format a duration as `1h 2m 3s`, rounded to whole seconds.
///
/// Leading zero units are omitted: `0s`, `5s`, `1m 5s`, `1h 0m 1s`.
pub fn format_duration(d: Duration) -> String {
    let mut secs = d.as_secs();
    if d.subsec_nanos() >= 500_000_000 {
        secs += 1;
    }

    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;

    if h > 0 {
        format!("{}h {}m {}s", h, m, s)
    } else if m > 0 {
        format!("{}m {}s", m, s)
    } else {
        format!("{}s", s)
    }
}

/// Format a latency at millisecond resolution: `42ms`, `1.5s`.
pub fn format_latency(d: Duration) -> String {
    let ms = (d.as_nanos() + 500_000) / 1_000_000;
    if ms < 1000 {
        return format!("{}ms", ms);
    }

    let whole = ms / 1000;
    let frac = ms % 1000;
    if frac == 0 {
        format!("{}s", whole)
    } else {
        let frac = format!("{:03}", frac);
        format!("{}.{}s", whole, frac.trim_end_matches('0'))
    }
}

/// Lines printed when the monitor exits.
pub fn summary_lines(summary: &Summary) -> Vec<String> {
    let mut lines = vec![
        "Exiting Connection Monitor".to_string(),
        format!("Total uptime: {}", format_duration(summary.uptime)),
        format!("Total downtime: {}", format_duration(summary.downtime)),
    ];

    if let Some(latency) = &summary.latency {
        lines.push(format!("Min latency: {}", format_latency(latency.min)));
        lines.push(format!("Max latency: {}", format_latency(latency.max)));
        lines.push(format!("Avg latency: {}", format_latency(latency.avg)));
    }

    lines
}
