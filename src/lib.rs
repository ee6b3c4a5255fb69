//! Sealpost client start-up.
//!
//! Loads configuration, installs tracing, wires the adapters and runs one
//! session bootstrap attempt.

pub mod bootstrap;

pub use bootstrap::run::{run_bootstrap, RunOutcome};
