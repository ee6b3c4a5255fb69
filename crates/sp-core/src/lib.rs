//! # sp-core
//!
//! Core domain models and port contracts for the Sealpost session bootstrap.
//!
//! This crate contains pure decision logic without any infrastructure dependencies.

pub mod bootstrap;
pub mod config;
pub mod keys;
pub mod ports;
pub mod route;
pub mod secret;
pub mod session;

// Re-export commonly used types at the crate root
pub use bootstrap::{BootstrapFailure, BootstrapOutcome, FailureKind, IdentityGate};
pub use config::AppConfig;
pub use keys::KeyPair;
pub use route::Route;
pub use secret::SecretString;
pub use session::{AccessToken, SessionTokenState};
