//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! probe / monitor / display
//!     → tracing events (startup, transitions, probe failures)
//!     → logging.rs subscriber → stderr
//! ```

pub mod logging;

pub use logging::init_logging;
