//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::{self, Write};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use connection_monitor::display::{StatusDisplay, StatusReport};
use connection_monitor::monitor::Summary;
use connection_monitor::probe::{Probe, ProbeFailure, ProbeResult};

/// Start a mock backend that answers every request with `status` after `delay`.
///
/// Returns the bound address (an ephemeral port on localhost).
pub async fn start_mock_backend(status: u16, delay: Duration) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut buf = [0u8; 1024];
                        let _ = socket.read(&mut buf).await;
                        tokio::time::sleep(delay).await;

                        let body = "ok";
                        let response = format!(
                            "HTTP/1.1 {} Mock\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// An address nothing is listening on.
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// HTTP client that ignores proxy environment variables.
pub fn test_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .no_proxy()
        .build()
        .unwrap()
}

pub fn up(ms: u64) -> ProbeResult {
    ProbeResult::reachable(Duration::from_millis(ms))
}

pub fn down() -> ProbeResult {
    ProbeResult::unreachable(ProbeFailure::Connect)
}

/// Probe that replays a fixed script, repeating the last result once exhausted.
pub struct ScriptedProbe {
    script: Mutex<VecDeque<ProbeResult>>,
    last: Mutex<ProbeResult>,
    delay: Duration,
}

impl ScriptedProbe {
    pub fn new(script: Vec<ProbeResult>) -> Self {
        let last = script.last().cloned().unwrap_or_else(down);
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(last),
            delay: Duration::ZERO,
        }
    }

    /// Take `delay` to answer each check, like a slow round trip.
    pub fn with_delay(script: Vec<ProbeResult>, delay: Duration) -> Self {
        Self {
            delay,
            ..Self::new(script)
        }
    }
}

impl Probe for ScriptedProbe {
    fn target(&self) -> &str {
        "scripted://target"
    }

    async fn probe(&self) -> ProbeResult {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(result) => {
                *self.last.lock().unwrap() = result.clone();
                result
            }
            None => self.last.lock().unwrap().clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Recording {
    pub target: Option<String>,
    pub reports: Vec<StatusReport>,
    pub summaries: Vec<Summary>,
}

/// Display that captures everything it is asked to draw.
#[derive(Clone, Default)]
pub struct RecordingDisplay {
    pub recording: Arc<Mutex<Recording>>,
}

impl StatusDisplay for RecordingDisplay {
    fn begin(&mut self, target: &str) {
        self.recording.lock().unwrap().target = Some(target.to_string());
    }

    fn render(&mut self, report: &StatusReport) {
        self.recording.lock().unwrap().reports.push(report.clone());
    }

    fn finish(&mut self, summary: &Summary) {
        self.recording.lock().unwrap().summaries.push(*summary);
    }
}

/// Writer whose bytes can be inspected after the display is moved away.
#[derive(Clone, Default)]
pub struct SharedBuffer(pub Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
