//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults (schema.rs)
//!     → optional TOML file (loader.rs)
//!     → command-line overrides (cli.rs)
//!     → validation.rs (semantic checks)
//!     → MonitorConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so a bare invocation works
//! - Durations are stored in milliseconds in files, parsed from
//!   human-readable strings on the command line
//! - Validation separates syntactic (serde) from semantic checks

pub mod duration;
pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{finalize, load_config, ConfigError};
pub use schema::{
    AccountingConfig, Attribution, DisplayConfig, MonitorConfig, ObservabilityConfig, ProbeConfig,
};
pub use validation::{validate_config, ValidationError};
