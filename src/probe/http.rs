//! HTTP reachability probe.
//!
//! # Responsibilities
//! - Issue one GET against the target per call
//! - Measure round-trip time to the response head
//! - Classify the outcome (2xx = reachable)

use std::time::Instant;

use thiserror::Error;

use crate::config::ProbeConfig;
use crate::probe::{Probe, ProbeFailure, ProbeResult};

const USER_AGENT: &str = concat!("connection-monitor/", env!("CARGO_PKG_VERSION"));

/// Errors raised while setting up the HTTP probe.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Probe that issues a GET request and checks for a 2xx status.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
    url: String,
}

impl HttpProbe {
    /// Build a probe whose client enforces the configured request timeout.
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self::with_client(client, config.url.clone()))
    }

    /// Use a preconfigured client. The client's own timeout bounds each probe.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl Probe for HttpProbe {
    fn target(&self) -> &str {
        &self.url
    }

    async fn probe(&self) -> ProbeResult {
        let start = Instant::now();

        match self.client.get(&self.url).send().await {
            Ok(response) => {
                let latency = start.elapsed();
                let status = response.status();
                if status.is_success() {
                    ProbeResult::reachable(latency)
                } else {
                    tracing::debug!(url = %self.url, status = %status, "Probe failed: non-success status");
                    ProbeResult::unreachable(ProbeFailure::Status(status.as_u16()))
                }
            }
            Err(e) => {
                let failure = classify(&e);
                tracing::debug!(url = %self.url, error = %e, kind = %failure, "Probe failed");
                ProbeResult::unreachable(failure)
            }
        }
    }
}

fn classify(e: &reqwest::Error) -> ProbeFailure {
    if e.is_timeout() {
        ProbeFailure::Timeout
    } else if e.is_connect() {
        ProbeFailure::Connect
    } else {
        ProbeFailure::Request(e.to_string())
    }
}
