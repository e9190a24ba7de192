//! Reachability probing subsystem.
//!
//! # Data Flow
//! ```text
//! Monitor tick
//!     → Probe::probe (http.rs: one GET against the target)
//!     → ProbeResult { reachable, latency, failure }
//!     → monitor accounting
//! ```
//!
//! # Design Decisions
//! - Network errors, timeouts and non-2xx statuses all classify as unreachable
//! - The failure kind is kept for diagnostics only and never changes the
//!   classification
//! - Probing is a trait so the loop can run against scripted outcomes

pub mod http;
pub mod result;

use std::future::Future;

pub use http::{HttpProbe, ProbeError};
pub use result::{ProbeFailure, ProbeResult};

/// A single reachability check against some target.
pub trait Probe {
    /// Human-readable description of what is being probed.
    fn target(&self) -> &str;

    /// Perform one check. Failures are reported in the result, never as errors.
    fn probe(&self) -> impl Future<Output = ProbeResult> + Send;
}
