//! Session bootstrap use case.
//!
//! This module exposes the bootstrap orchestrator.

pub mod orchestrator;

pub use orchestrator::{BootstrapError, BootstrapOrchestrator, BootstrapOrchestratorDeps};
