//! Tracing configuration for Sealpost
//!
//! Installs the global `tracing-subscriber` registry:
//!
//! - **Filter**: `RUST_LOG` wins, then `[logging] filter`, then built-in
//!   directives (debug in development builds, info otherwise)
//! - **stdout**: always on
//! - **File**: daily-rolling `sealpost.log` under `[logging] log_dir` when set

use std::{fs, io, path::Path, sync::OnceLock};

use sp_core::config::AppConfig;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

const LOG_FILE_PREFIX: &str = "sealpost.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        "warn".to_string(),
        format!("sealpost={level}"),
        format!("sealpost_lib={level}"),
        format!("sp_app={level}"),
        format!("sp_infra={level}"),
        "reqwest=warn".to_string(),
        "hyper_util=off".to_string(),
    ]
}

fn build_env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config.log_filter.is_empty() {
            EnvFilter::new(build_filter_directives(is_development()).join(","))
        } else {
            EnvFilter::new(&config.log_filter)
        }
    })
}

/// Initialize the tracing subscriber.
///
/// Call once from `main` before the bootstrap runs. A file writer that
/// cannot be created is reported on stderr and logging continues on stdout.
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = build_env_filter(config);

    let stdout_writer = BoxMakeWriter::new(io::stdout);
    let file_writer = if config.log_dir.as_os_str().is_empty() {
        None
    } else {
        match build_file_writer(&config.log_dir) {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, falling back to stdout: {err}");
                None
            }
        }
    };

    // "2026-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stdout_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
