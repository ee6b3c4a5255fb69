use serde::{Deserialize, Serialize};

use crate::route::Route;

/// Category of a failure that is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Identity,
    Storage,
    CredentialPersist,
}

/// Failures that end a bootstrap attempt with an error report.
///
/// Unlock failures are deliberately absent: they route to
/// [`Route::LoginExisting`] instead.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapFailure {
    #[error("failed to initialize authentication: {0}")]
    Identity(#[source] anyhow::Error),
    #[error("failed to open account store: {0}")]
    Storage(#[source] anyhow::Error),
    #[error("failed to store unlocked credentials: {0}")]
    CredentialPersist(#[source] anyhow::Error),
}

impl BootstrapFailure {
    pub fn kind(&self) -> FailureKind {
        match self {
            BootstrapFailure::Identity(_) => FailureKind::Identity,
            BootstrapFailure::Storage(_) => FailureKind::Storage,
            BootstrapFailure::CredentialPersist(_) => FailureKind::CredentialPersist,
        }
    }
}

/// Terminal result of one bootstrap attempt.
///
/// Exactly one of these is produced per attempt and dispatched once:
/// `Navigated` goes to the router, `Errored` goes to the error reporter.
#[derive(Debug)]
pub enum BootstrapOutcome {
    Navigated(Route),
    Errored(BootstrapFailure),
}

impl BootstrapOutcome {
    pub fn route(&self) -> Option<Route> {
        match self {
            BootstrapOutcome::Navigated(route) => Some(*route),
            BootstrapOutcome::Errored(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&BootstrapFailure> {
        match self {
            BootstrapOutcome::Navigated(_) => None,
            BootstrapOutcome::Errored(failure) => Some(failure),
        }
    }
}
