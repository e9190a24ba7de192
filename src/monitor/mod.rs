//! Monitoring subsystem.
//!
//! # Data Flow
//! ```text
//! initial probe → seed MonitorState → render
//! loop:
//!     ticker.tick()   → probe → state.record → render
//!     shutdown.recv() → state.close → finish(summary) → return
//! ```
//!
//! # Design Decisions
//! - One operation at a time: probes never overlap
//! - State is owned by the loop, no globals
//! - A slow probe delays the next tick instead of bursting

pub mod runner;
pub mod state;

pub use runner::Monitor;
pub use state::{LatencyStats, LatencySummary, MonitorState, Summary, TickOutcome};
