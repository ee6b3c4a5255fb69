//! Sealpost Application Orchestration Layer
//!
//! This crate contains the session bootstrap use case that decides which
//! onboarding or resume screen the client opens on start.

pub mod usecases;

pub use usecases::bootstrap::{BootstrapError, BootstrapOrchestrator, BootstrapOrchestratorDeps};
