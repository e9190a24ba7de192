//! Monitor loop behavior with scripted probe outcomes.

use std::time::Duration;

use connection_monitor::config::{Attribution, MonitorConfig};
use connection_monitor::display::PlainDisplay;
use connection_monitor::lifecycle::Shutdown;
use connection_monitor::monitor::{LatencySummary, Monitor, Summary};
use connection_monitor::probe::{HttpProbe, ProbeResult};

mod common;
use common::{down, up, RecordingDisplay, ScriptedProbe, SharedBuffer};

fn config(interval: Duration, attribution: Attribution) -> MonitorConfig {
    let mut config = MonitorConfig::default();
    config.probe.interval_ms = interval.as_millis() as u64;
    config.accounting.attribution = attribution;
    config
}

/// Run a scripted monitor at 2s ticks and interrupt it after `run_for`.
async fn run_scripted(
    script: Vec<ProbeResult>,
    attribution: Attribution,
    run_for: Duration,
) -> (Summary, RecordingDisplay) {
    let display = RecordingDisplay::default();
    let monitor = Monitor::new(
        ScriptedProbe::new(script),
        display.clone(),
        &config(Duration::from_secs(2), attribution),
    );

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

    tokio::time::sleep(run_for).await;
    shutdown.trigger();

    (handle.await.unwrap(), display)
}

#[tokio::test(start_paused = true)]
async fn test_previous_attribution_totals() {
    let (summary, _) = run_scripted(
        vec![up(20), up(20), down(), down()],
        Attribution::Previous,
        Duration::from_secs(7),
    )
    .await;

    // ticks at 2s, 4s, 6s; interrupted at 7s while disconnected
    assert_eq!(summary.uptime, Duration::from_secs(4));
    assert_eq!(summary.downtime, Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn test_current_attribution_totals() {
    let (summary, _) = run_scripted(
        vec![up(20), up(20), down(), down()],
        Attribution::Current,
        Duration::from_secs(7),
    )
    .await;

    assert_eq!(summary.uptime, Duration::from_secs(2));
    assert_eq!(summary.downtime, Duration::from_secs(5));
}

#[tokio::test(start_paused = true)]
async fn test_totals_cover_elapsed_time() {
    let script = vec![down(), up(5), up(7), down(), up(9), down(), down(), up(3)];
    for rule in [Attribution::Previous, Attribution::Current] {
        let (summary, _) = run_scripted(script.clone(), rule, Duration::from_millis(15_500)).await;
        assert_eq!(summary.uptime + summary.downtime, Duration::from_millis(15_500));
    }
}

#[tokio::test(start_paused = true)]
async fn test_latency_statistics() {
    let (summary, _) = run_scripted(
        vec![up(30), up(10), down(), up(50)],
        Attribution::Previous,
        Duration::from_secs(7),
    )
    .await;

    assert_eq!(
        summary.latency,
        Some(LatencySummary {
            min: Duration::from_millis(10),
            max: Duration::from_millis(50),
            avg: Duration::from_millis(30),
        })
    );
}

#[tokio::test(start_paused = true)]
async fn test_no_latency_when_never_connected() {
    let (summary, _) =
        run_scripted(vec![down()], Attribution::Previous, Duration::from_secs(5)).await;

    assert_eq!(summary.latency, None);
    assert_eq!(summary.uptime, Duration::ZERO);
    assert_eq!(summary.downtime, Duration::from_secs(5));
}

#[tokio::test(start_paused = true)]
async fn test_renders_once_per_probe() {
    let (summary, display) = run_scripted(
        vec![up(15), down(), down(), up(25)],
        Attribution::Previous,
        Duration::from_secs(7),
    )
    .await;
    let recording = display.recording.lock().unwrap();

    assert_eq!(recording.target.as_deref(), Some("scripted://target"));
    assert_eq!(recording.reports.len(), 4);
    assert_eq!(recording.summaries, vec![summary]);

    let connected: Vec<bool> = recording.reports.iter().map(|r| r.connected).collect();
    assert_eq!(connected, vec![true, false, false, true]);

    // initial render has no time in state; the second down tick has held for 2s
    assert_eq!(recording.reports[0].in_state, Duration::ZERO);
    assert_eq!(recording.reports[1].in_state, Duration::ZERO);
    assert_eq!(recording.reports[2].in_state, Duration::from_secs(2));
    assert_eq!(recording.reports[3].latency, Some(Duration::from_millis(25)));
}

#[tokio::test(start_paused = true)]
async fn test_interrupt_during_wait_prints_summary() {
    let out = SharedBuffer::default();
    let monitor = Monitor::new(
        ScriptedProbe::new(vec![up(12)]),
        PlainDisplay::new(out.clone()),
        &config(Duration::from_secs(60), Attribution::Previous),
    );

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

    tokio::time::sleep(Duration::from_secs(1)).await;
    shutdown.trigger();

    let summary = tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("monitor should stop well before the next tick")
        .unwrap();
    assert_eq!(summary.uptime, Duration::from_secs(1));

    let text = out.contents();
    assert!(text.contains("Exiting Connection Monitor"));
    assert!(text.contains("Total uptime: 1s"));
    assert!(text.contains("Total downtime: 0s"));
    assert!(text.contains("Avg latency: 12ms"));
    assert_eq!(text.matches("Exiting Connection Monitor").count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_interrupt_during_slow_check_waits_for_it() {
    let display = RecordingDisplay::default();
    let monitor = Monitor::new(
        ScriptedProbe::with_delay(vec![up(20)], Duration::from_secs(3)),
        display.clone(),
        &config(Duration::from_secs(2), Attribution::Previous),
    );

    let t0 = tokio::time::Instant::now();
    let shutdown = Shutdown::new();
    let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

    // initial check runs 0s..3s, first tick at 5s is still in flight at 6s
    tokio::time::sleep(Duration::from_secs(6)).await;
    shutdown.trigger();
    let summary = handle.await.unwrap();

    assert_eq!(t0.elapsed(), Duration::from_secs(8));
    assert_eq!(summary.uptime + summary.downtime, Duration::from_secs(5));
    assert_eq!(summary.uptime, Duration::from_secs(5));

    let recording = display.recording.lock().unwrap();
    assert_eq!(recording.reports.len(), 2);
    assert_eq!(recording.summaries, vec![summary]);
}

#[tokio::test]
async fn test_monitor_against_http_backend() {
    let addr = common::start_mock_backend(200, Duration::ZERO).await;
    let probe = HttpProbe::with_client(
        common::test_client(Duration::from_secs(2)),
        format!("http://{}/", addr),
    );
    let display = RecordingDisplay::default();
    let monitor = Monitor::new(
        probe,
        display.clone(),
        &config(Duration::from_millis(100), Attribution::Previous),
    );

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

    tokio::time::sleep(Duration::from_millis(450)).await;
    shutdown.trigger();
    let summary = handle.await.unwrap();

    assert!(summary.uptime > Duration::ZERO);
    assert_eq!(summary.downtime, Duration::ZERO);
    assert!(summary.latency.is_some());

    let recording = display.recording.lock().unwrap();
    assert!(recording.reports.len() >= 2);
    assert!(recording.reports.iter().all(|r| r.connected));
}
