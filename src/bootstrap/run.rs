//! Runs a single bootstrap attempt and collects what it dispatched.

use tracing::{error, info};

use sp_core::config::AppConfig;
use sp_core::Route;
use sp_infra::ErrorNotice;

use super::wiring::{wire_dependencies, BootstrapWiring};

/// What the view layer should show after start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Navigated(Route),
    Reported(ErrorNotice),
    /// Automatic start-up is disabled by configuration.
    Skipped,
}

pub async fn run_bootstrap(config: &AppConfig) -> anyhow::Result<RunOutcome> {
    if config.prevent_auto_start {
        info!("automatic bootstrap disabled by configuration");
        return Ok(RunOutcome::Skipped);
    }

    let wiring = wire_dependencies(config)?;
    run_wired(wiring).await
}

/// Run the attempt on already-wired dependencies.
pub async fn run_wired(wiring: BootstrapWiring) -> anyhow::Result<RunOutcome> {
    let BootstrapWiring {
        orchestrator,
        mut routes,
        mut notices,
        ..
    } = wiring;

    let outcome = orchestrator.bootstrap().await.inspect_err(|err| {
        error!(error = %err, "bootstrap aborted without navigation");
    })?;

    if let Ok(route) = routes.try_recv() {
        return Ok(RunOutcome::Navigated(route));
    }
    if let Ok(notice) = notices.try_recv() {
        return Ok(RunOutcome::Reported(notice));
    }
    anyhow::bail!("Bootstrap finished without dispatching {outcome:?}")
}
