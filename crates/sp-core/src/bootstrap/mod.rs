//! Bootstrap domain module.
//!
//! Defines the terminal outcome of a bootstrap attempt and the pure
//! navigation policy for each branch point.

pub mod outcome;
pub mod policy;

pub use outcome::{BootstrapFailure, BootstrapOutcome, FailureKind};
pub use policy::{route_for_key_sync, IdentityGate};
