#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{sleep, Instant};

use sp_app::{BootstrapOrchestrator, BootstrapOrchestratorDeps};
use sp_core::ports::{
    AccountStorePort, AuthPort, ErrorReporterPort, MailProviderPort, OAuthStatePort,
    PrivateKeyPort, RouterPort, UpdateCheckPort, UpdateStatus,
};
use sp_core::{AccessToken, BootstrapFailure, FailureKind, KeyPair, Route, SecretString};

pub type Step = Result<(), &'static str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateBehavior {
    UpToDate,
    Fails,
    /// Never completes.
    Hangs,
}

/// Scripted collaborator responses for one bootstrap attempt.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub auth_init: Step,
    pub email_address: Option<&'static str>,
    pub access_token: Option<&'static str>,
    pub login: Step,
    pub account_init: Result<bool, &'static str>,
    pub unlock: Step,
    pub store_credentials: Step,
    pub key_init: Step,
    pub is_synced: Result<bool, &'static str>,
    pub destroy: Step,
    pub update: UpdateBehavior,
}

impl Default for Scenario {
    /// Returning user with local keys that unlock cleanly.
    fn default() -> Self {
        Self {
            auth_init: Ok(()),
            email_address: Some("fred@foo.com"),
            access_token: Some("token"),
            login: Ok(()),
            account_init: Ok(true),
            unlock: Ok(()),
            store_credentials: Ok(()),
            key_init: Ok(()),
            is_synced: Ok(false),
            destroy: Ok(()),
            update: UpdateBehavior::UpToDate,
        }
    }
}

/// Records every collaborator call in order.
///
/// The update check is counted separately since it runs on a detached task.
pub struct Recorder {
    scenario: Scenario,
    calls: StdMutex<Vec<String>>,
    update_checks: AtomicUsize,
}

impl Recorder {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn step(&self, call: &str, step: Step) -> anyhow::Result<()> {
        self.record(call);
        step.map_err(|reason| anyhow::anyhow!(reason))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == call).count()
    }

    pub fn position(&self, call: &str) -> Option<usize> {
        self.calls().iter().position(|c| c.as_str() == call)
    }

    pub fn navigations(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with("router.navigate:"))
            .collect()
    }

    pub fn reports(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with("reporter.report:"))
            .collect()
    }

    pub fn update_checks(&self) -> usize {
        self.update_checks.load(Ordering::SeqCst)
    }

    /// Poll until the detached update check ran `expected` times or the
    /// deadline passes, then return the observed count.
    pub async fn wait_for_update_checks(&self, expected: usize) -> usize {
        let deadline = Instant::now() + Duration::from_secs(1);
        while self.update_checks() < expected && Instant::now() < deadline {
            sleep(Duration::from_millis(5)).await;
        }
        // Give a stray second dispatch a chance to show up.
        sleep(Duration::from_millis(20)).await;
        self.update_checks()
    }
}

#[async_trait]
impl AuthPort for Recorder {
    async fn init(&self) -> anyhow::Result<()> {
        self.step("auth.init", self.scenario.auth_init)
    }

    fn email_address(&self) -> Option<String> {
        self.record("auth.email_address");
        self.scenario.email_address.map(str::to_string)
    }

    async fn store_credentials(&self) -> anyhow::Result<()> {
        self.step("auth.store_credentials", self.scenario.store_credentials)
    }
}

impl OAuthStatePort for Recorder {
    fn access_token(&self) -> Option<AccessToken> {
        self.record("oauth.access_token");
        self.scenario.access_token.map(SecretString::new)
    }
}

#[async_trait]
impl MailProviderPort for Recorder {
    async fn login(&self) -> anyhow::Result<()> {
        self.step("provider.login", self.scenario.login)
    }

    async fn unlock(&self, _keys: &KeyPair) -> anyhow::Result<()> {
        self.step("provider.unlock", self.scenario.unlock)
    }
}

#[async_trait]
impl AccountStorePort for Recorder {
    async fn init(&self) -> anyhow::Result<Option<KeyPair>> {
        self.record("account.init");
        match self.scenario.account_init {
            Ok(true) => Ok(Some(KeyPair::new(
                "publicKey",
                SecretString::new("privateKey"),
            ))),
            Ok(false) => Ok(None),
            Err(reason) => Err(anyhow::anyhow!(reason)),
        }
    }
}

#[async_trait]
impl PrivateKeyPort for Recorder {
    async fn init(&self) -> anyhow::Result<()> {
        self.step("private_key.init", self.scenario.key_init)
    }

    async fn is_synced(&self) -> anyhow::Result<bool> {
        self.record("private_key.is_synced");
        self.scenario
            .is_synced
            .map_err(|reason| anyhow::anyhow!(reason))
    }

    async fn destroy(&self) -> anyhow::Result<()> {
        self.step("private_key.destroy", self.scenario.destroy)
    }
}

#[async_trait]
impl UpdateCheckPort for Recorder {
    async fn check_for_update(&self) -> anyhow::Result<UpdateStatus> {
        self.update_checks.fetch_add(1, Ordering::SeqCst);
        match self.scenario.update {
            UpdateBehavior::UpToDate => Ok(UpdateStatus::UpToDate),
            UpdateBehavior::Fails => Err(anyhow::anyhow!("manifest unavailable")),
            UpdateBehavior::Hangs => std::future::pending().await,
        }
    }
}

#[async_trait]
impl ErrorReporterPort for Recorder {
    async fn report(&self, failure: &BootstrapFailure) {
        let kind = match failure.kind() {
            FailureKind::Identity => "identity",
            FailureKind::Storage => "storage",
            FailureKind::CredentialPersist => "credential_persist",
        };
        self.record(format!("reporter.report:{kind}"));
    }
}

#[async_trait]
impl RouterPort for Recorder {
    async fn navigate(&self, route: Route) {
        self.record(format!("router.navigate:{route}"));
    }
}

pub fn harness(scenario: Scenario) -> (Arc<Recorder>, BootstrapOrchestrator) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();

    let recorder = Arc::new(Recorder {
        scenario,
        calls: StdMutex::new(Vec::new()),
        update_checks: AtomicUsize::new(0),
    });

    let orchestrator = BootstrapOrchestrator::from_deps(BootstrapOrchestratorDeps {
        auth: recorder.clone(),
        oauth: recorder.clone(),
        mail_provider: recorder.clone(),
        account_store: recorder.clone(),
        private_key: recorder.clone(),
        update_checker: recorder.clone(),
        error_reporter: recorder.clone(),
        router: recorder.clone(),
    });

    (recorder, orchestrator)
}
