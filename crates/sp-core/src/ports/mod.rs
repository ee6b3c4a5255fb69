//! Port interfaces consumed by the bootstrap orchestrator
//!
//! Ports define the contract between the bootstrap use case and the
//! collaborators that own authentication, account storage, key lifecycle and
//! the user-facing sinks. Implementations live in the infrastructure layer.

pub mod account_store;
pub mod auth;
pub mod error_reporter;
pub mod mail_provider;
pub mod oauth;
pub mod private_key;
pub mod router;
pub mod update;

pub use account_store::AccountStorePort;
pub use auth::AuthPort;
pub use error_reporter::ErrorReporterPort;
pub use mail_provider::MailProviderPort;
pub use oauth::OAuthStatePort;
pub use private_key::PrivateKeyPort;
pub use router::RouterPort;
pub use update::{UpdateCheckPort, UpdateStatus};
