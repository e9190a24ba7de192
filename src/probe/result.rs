//! Probe outcome types.

use std::fmt;
use std::time::Duration;

/// Why a probe classified the target as unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    /// No response head within the request deadline.
    Timeout,
    /// Could not establish a connection (DNS, refused, TLS handshake).
    Connect,
    /// A response arrived with a status outside [200, 300).
    Status(u16),
    /// Any other transport error.
    Request(String),
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeFailure::Timeout => write!(f, "timeout"),
            ProbeFailure::Connect => write!(f, "connection error"),
            ProbeFailure::Status(code) => write!(f, "status {}", code),
            ProbeFailure::Request(msg) => write!(f, "request error: {}", msg),
        }
    }
}

/// Outcome of one probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub reachable: bool,
    /// Round-trip time, present only when reachable.
    pub latency: Option<Duration>,
    pub failure: Option<ProbeFailure>,
}

impl ProbeResult {
    pub fn reachable(latency: Duration) -> Self {
        Self {
            reachable: true,
            latency: Some(latency),
            failure: None,
        }
    }

    pub fn unreachable(failure: ProbeFailure) -> Self {
        Self {
            reachable: false,
            latency: None,
            failure: Some(failure),
        }
    }

    /// Latency eligible for aggregation: reachable and strictly positive.
    pub fn sample(&self) -> Option<Duration> {
        match self.latency {
            Some(latency) if self.reachable && !latency.is_zero() => Some(latency),
            _ => None,
        }
    }
}
