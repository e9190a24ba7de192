//! Internet connection monitor.
//!
//! Probes a target URL on a fixed interval, keeps uptime/downtime and
//! latency statistics, and redraws a status view until interrupted.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────┐   tick    ┌─────────┐  ProbeResult  ┌──────────────┐  StatusReport  ┌─────────┐
//!   │  ticker  │──────────▶│  probe  │──────────────▶│ MonitorState │───────────────▶│ display │
//!   └──────────┘           └─────────┘               └──────────────┘                └─────────┘
//!   ┌──────────┐ shutdown                                   │ close                      ▲
//!   │ signals  │────────────────────────────────────────────┴──────── Summary ──────────┘
//!   └──────────┘
//! ```

use std::io::{self, IsTerminal};

use clap::Parser;

use connection_monitor::cli::Cli;
use connection_monitor::config::{finalize, load_config, MonitorConfig};
use connection_monitor::display::{PlainDisplay, StatusDisplay, TerminalDisplay};
use connection_monitor::lifecycle::{spawn_signal_listener, Shutdown};
use connection_monitor::monitor::Monitor;
use connection_monitor::observability::init_logging;
use connection_monitor::probe::HttpProbe;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => load_config(path)?,
        None => MonitorConfig::default(),
    };
    let config = finalize(cli.apply(base))?;

    init_logging(&config.observability.log_level);

    tracing::info!(
        url = %config.probe.url,
        interval_ms = config.probe.interval_ms,
        timeout_ms = config.probe.timeout_ms,
        attribution = %config.accounting.attribution,
        "Configuration loaded"
    );

    let probe = HttpProbe::new(&config.probe)?;

    let display: Box<dyn StatusDisplay> = if config.display.plain || !io::stdout().is_terminal() {
        Box::new(PlainDisplay::stdout())
    } else {
        Box::new(TerminalDisplay::stdout())
    };

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    spawn_signal_listener(shutdown.clone());

    Monitor::new(probe, display, &config).run(shutdown_rx).await;

    tracing::info!("Shutdown complete");
    Ok(())
}
