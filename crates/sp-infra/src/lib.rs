//! Infrastructure adapters for the Sealpost session bootstrap.
//!
//! Every adapter implements one or more `sp_core::ports` traits.

pub mod account;
pub mod http;
pub mod keys;
pub mod provider;
pub mod session;
pub mod sinks;
pub mod update;

pub use account::FileAccountStore;
pub use keys::HttpKeyDirectory;
pub use provider::HttpMailProvider;
pub use session::FileSessionStore;
pub use sinks::{ChannelErrorReporter, ChannelRouter, ErrorNotice};
pub use update::HttpUpdateChecker;
