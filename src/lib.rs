//! Internet connection monitor library.

pub mod cli;
pub mod config;
pub mod display;
pub mod lifecycle;
pub mod monitor;
pub mod observability;
pub mod probe;

pub use config::MonitorConfig;
pub use lifecycle::Shutdown;
pub use monitor::{Monitor, Summary};
