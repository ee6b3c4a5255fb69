//! # Dependency Wiring / 依赖注入
//!
//! Assembly only: construct the adapters from `AppConfig`, inject them into
//! the bootstrap orchestrator, hand the sink receivers to the caller. No
//! decisions are made here.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;

use sp_app::{BootstrapOrchestrator, BootstrapOrchestratorDeps};
use sp_core::config::AppConfig;
use sp_core::Route;
use sp_infra::http::build_http_client;
use sp_infra::{
    ChannelErrorReporter, ChannelRouter, ErrorNotice, FileAccountStore, FileSessionStore,
    HttpKeyDirectory, HttpMailProvider, HttpUpdateChecker,
};

/// Everything one bootstrap attempt needs, fully wired.
pub struct BootstrapWiring {
    pub orchestrator: BootstrapOrchestrator,
    /// Receives the route chosen by the attempt.
    pub routes: UnboundedReceiver<Route>,
    /// Receives the error reported by the attempt.
    pub notices: UnboundedReceiver<ErrorNotice>,
    pub session: Arc<FileSessionStore>,
}

pub fn wire_dependencies(config: &AppConfig) -> anyhow::Result<BootstrapWiring> {
    let client = build_http_client(Duration::from_secs(config.http_timeout_secs))?;

    let session = Arc::new(FileSessionStore::with_defaults(config.data_dir.clone()));
    let (router, routes) = ChannelRouter::new();
    let (error_reporter, notices) = ChannelErrorReporter::new();

    let deps = BootstrapOrchestratorDeps {
        auth: session.clone(),
        oauth: session.clone(),
        mail_provider: Arc::new(HttpMailProvider::new(
            client.clone(),
            config.provider_userinfo_url.clone(),
            session.clone(),
        )),
        account_store: Arc::new(FileAccountStore::with_defaults(
            config.data_dir.clone(),
            session.clone(),
        )),
        private_key: Arc::new(HttpKeyDirectory::new(
            client.clone(),
            config.key_directory_url.clone(),
            session.clone(),
        )),
        update_checker: Arc::new(HttpUpdateChecker::new(
            client,
            config.update_manifest_url.clone(),
            config.current_version.clone(),
        )),
        error_reporter: Arc::new(error_reporter),
        router: Arc::new(router),
    };

    Ok(BootstrapWiring {
        orchestrator: BootstrapOrchestrator::from_deps(deps),
        routes,
        notices,
        session,
    })
}
