//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGINT/SIGTERM (Ctrl+C elsewhere) → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     trigger → broadcast → monitor loop exits → summary printed
//! ```
//!
//! # Design Decisions
//! - One shutdown path: the loop observes the broadcast and returns
//! - Subscribe before probing starts so an early signal is not missed

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::{spawn_signal_listener, wait_for_signal};
