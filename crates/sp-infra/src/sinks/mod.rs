//! Channel-backed router and error reporter.
//!
//! The view layer owns the receiving halves and renders whatever arrives.

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{error, warn};

use sp_core::ports::{ErrorReporterPort, RouterPort};
use sp_core::{BootstrapFailure, FailureKind, Route};

/// User-facing error message derived from a bootstrap failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorNotice {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&BootstrapFailure> for ErrorNotice {
    fn from(failure: &BootstrapFailure) -> Self {
        Self {
            kind: failure.kind(),
            message: failure.to_string(),
        }
    }
}

pub struct ChannelRouter {
    tx: mpsc::UnboundedSender<Route>,
}

impl ChannelRouter {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Route>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl RouterPort for ChannelRouter {
    async fn navigate(&self, route: Route) {
        if self.tx.send(route).is_err() {
            warn!(route = %route, "route receiver dropped, navigation lost");
        }
    }
}

pub struct ChannelErrorReporter {
    tx: mpsc::UnboundedSender<ErrorNotice>,
}

impl ChannelErrorReporter {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ErrorNotice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl ErrorReporterPort for ChannelErrorReporter {
    async fn report(&self, failure: &BootstrapFailure) {
        let notice = ErrorNotice::from(failure);
        if let Err(err) = self.tx.send(notice) {
            error!(notice = ?err.0, "error receiver dropped, notice lost");
        }
    }
}
