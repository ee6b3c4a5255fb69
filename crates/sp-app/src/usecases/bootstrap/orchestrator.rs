//! Bootstrap orchestrator.
//!
//! This module drives the start-up decision tree and dispatches exactly one
//! terminal action (navigate or report) per attempt.

use std::sync::Arc;

use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use sp_core::{
    bootstrap::{route_for_key_sync, BootstrapFailure, BootstrapOutcome, IdentityGate},
    ports::{
        AccountStorePort, AuthPort, ErrorReporterPort, MailProviderPort, OAuthStatePort,
        PrivateKeyPort, RouterPort, UpdateCheckPort, UpdateStatus,
    },
    KeyPair, Route, SessionTokenState,
};

/// Failures the orchestrator does not report itself.
///
/// These propagate to the caller without any navigation or error report.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("key provisioning failed: {0}")]
    KeyProvisioning(#[source] anyhow::Error),
}

/// Orchestrator that resolves a bootstrap attempt to one navigation or one
/// error report.
pub struct BootstrapOrchestrator {
    auth: Arc<dyn AuthPort>,
    oauth: Arc<dyn OAuthStatePort>,
    mail_provider: Arc<dyn MailProviderPort>,
    account_store: Arc<dyn AccountStorePort>,
    private_key: Arc<dyn PrivateKeyPort>,
    update_checker: Arc<dyn UpdateCheckPort>,
    error_reporter: Arc<dyn ErrorReporterPort>,
    router: Arc<dyn RouterPort>,
}

/// Helper for constructing the orchestrator with explicit dependency fields.
pub struct BootstrapOrchestratorDeps {
    pub auth: Arc<dyn AuthPort>,
    pub oauth: Arc<dyn OAuthStatePort>,
    pub mail_provider: Arc<dyn MailProviderPort>,
    pub account_store: Arc<dyn AccountStorePort>,
    pub private_key: Arc<dyn PrivateKeyPort>,
    pub update_checker: Arc<dyn UpdateCheckPort>,
    pub error_reporter: Arc<dyn ErrorReporterPort>,
    pub router: Arc<dyn RouterPort>,
}

impl BootstrapOrchestrator {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        auth: Arc<dyn AuthPort>,
        oauth: Arc<dyn OAuthStatePort>,
        mail_provider: Arc<dyn MailProviderPort>,
        account_store: Arc<dyn AccountStorePort>,
        private_key: Arc<dyn PrivateKeyPort>,
        update_checker: Arc<dyn UpdateCheckPort>,
        error_reporter: Arc<dyn ErrorReporterPort>,
        router: Arc<dyn RouterPort>,
    ) -> Self {
        Self {
            auth,
            oauth,
            mail_provider,
            account_store,
            private_key,
            update_checker,
            error_reporter,
            router,
        }
    }

    /// Construct an orchestrator from dependency bundle.
    pub fn from_deps(deps: BootstrapOrchestratorDeps) -> Self {
        let BootstrapOrchestratorDeps {
            auth,
            oauth,
            mail_provider,
            account_store,
            private_key,
            update_checker,
            error_reporter,
            router,
        } = deps;

        Self::new(
            auth,
            oauth,
            mail_provider,
            account_store,
            private_key,
            update_checker,
            error_reporter,
            router,
        )
    }

    /// Run one bootstrap attempt.
    ///
    /// On `Ok`, the returned outcome has already been dispatched: the router
    /// was called for `Navigated`, the error reporter for `Errored`. On `Err`,
    /// neither sink was called.
    ///
    /// Callers must not run two attempts concurrently.
    pub async fn bootstrap(&self) -> Result<BootstrapOutcome, BootstrapError> {
        let span = info_span!("usecase.bootstrap", attempt_id = %Uuid::new_v4());
        async {
            let outcome = self.decide().await?;
            self.dispatch(&outcome).await;
            Ok(outcome)
        }
        .instrument(span)
        .await
    }

    async fn decide(&self) -> Result<BootstrapOutcome, BootstrapError> {
        if let Err(err) = self.auth.init().await {
            return Ok(BootstrapOutcome::Errored(BootstrapFailure::Identity(err)));
        }

        let session = self.read_identity();
        let gate = IdentityGate::evaluate(&session);
        debug!(
            ?gate,
            has_email = session.has_email_address(),
            has_token = session.has_access_token(),
            "bootstrap identity evaluated"
        );

        if let Some(route) = gate.terminal_route() {
            return Ok(BootstrapOutcome::Navigated(route));
        }

        if gate == IdentityGate::ProviderLogin {
            // Not gated: a failed login surfaces through the account store.
            if let Err(err) = self.mail_provider.login().await {
                warn!(error = %err, "provider login failed, continuing with account store");
            }
        }

        self.spawn_update_check();

        let keys = match self.account_store.init().await {
            Ok(keys) => keys,
            Err(err) => return Ok(BootstrapOutcome::Errored(BootstrapFailure::Storage(err))),
        };

        match keys {
            Some(keys) => Ok(self.unlock_and_resume(&keys).await),
            None => self.provision_keys().await.map(BootstrapOutcome::Navigated),
        }
    }

    fn read_identity(&self) -> SessionTokenState {
        SessionTokenState::new(self.auth.email_address(), self.oauth.access_token())
    }

    async fn unlock_and_resume(&self, keys: &KeyPair) -> BootstrapOutcome {
        if let Err(err) = self.mail_provider.unlock(keys).await {
            info!(
                error = %err,
                fingerprint = %keys.fingerprint(),
                "local keys could not be unlocked"
            );
            return BootstrapOutcome::Navigated(Route::LoginExisting);
        }

        match self.auth.store_credentials().await {
            Ok(()) => BootstrapOutcome::Navigated(Route::Account),
            Err(err) => BootstrapOutcome::Errored(BootstrapFailure::CredentialPersist(err)),
        }
    }

    async fn provision_keys(&self) -> Result<Route, BootstrapError> {
        self.private_key
            .init()
            .await
            .map_err(BootstrapError::KeyProvisioning)?;
        let synced = self
            .private_key
            .is_synced()
            .await
            .map_err(BootstrapError::KeyProvisioning)?;
        debug!(synced, "private key sync status resolved");

        // Navigation waits for the key state to be released.
        self.private_key
            .destroy()
            .await
            .map_err(BootstrapError::KeyProvisioning)?;
        Ok(route_for_key_sync(synced))
    }

    fn spawn_update_check(&self) {
        let update_checker = Arc::clone(&self.update_checker);
        tokio::spawn(
            async move {
                match update_checker.check_for_update().await {
                    Ok(UpdateStatus::Available { version }) => {
                        info!(%version, "client update available");
                    }
                    Ok(status) => debug!(?status, "update check finished"),
                    Err(err) => warn!(error = %err, "update check failed"),
                }
            }
            .in_current_span(),
        );
    }

    async fn dispatch(&self, outcome: &BootstrapOutcome) {
        match outcome {
            BootstrapOutcome::Navigated(route) => {
                info!(route = %route, "bootstrap navigating");
                self.router.navigate(*route).await;
            }
            BootstrapOutcome::Errored(failure) => {
                error!(kind = ?failure.kind(), error = %failure, "bootstrap failed");
                self.error_reporter.report(failure).await;
            }
        }
    }
}
