//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Fill empty values from system defaults / 用系统默认值填充空值
//!
//! `load_config` accepts whatever is in the file. Defaults are applied only
//! by `resolve_config`, after loading.

use anyhow::Context;
use std::path::PathBuf;
use sp_core::config::AppConfig;

const APP_DIR_NAME: &str = "sealpost";
const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// **NO validation is performed**: empty strings and missing sections are
/// facts, not errors.
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Build the effective configuration for one run.
///
/// - `config_path`: optional TOML file; without it every value is a default
/// - `data_dir`: overrides `[general] data_dir`
///
/// Empty values left after loading are taken from
/// [`AppConfig::with_system_defaults`]. A zero timeout counts as empty.
pub fn resolve_config(
    config_path: Option<PathBuf>,
    data_dir: Option<PathBuf>,
) -> anyhow::Result<AppConfig> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => AppConfig::empty(),
    };

    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }
    if config.data_dir.as_os_str().is_empty() {
        config.data_dir = default_data_dir()?;
    }

    Ok(fill_defaults(config))
}

fn default_data_dir() -> anyhow::Result<PathBuf> {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .context("Failed to determine local data directory")
}

fn fill_defaults(config: AppConfig) -> AppConfig {
    let defaults = AppConfig::with_system_defaults(config.data_dir.clone(), CLIENT_VERSION);
    let or_default = |value: String, default: String| {
        if value.is_empty() {
            default
        } else {
            value
        }
    };

    AppConfig {
        provider_userinfo_url: or_default(
            config.provider_userinfo_url,
            defaults.provider_userinfo_url,
        ),
        http_timeout_secs: if config.http_timeout_secs == 0 {
            defaults.http_timeout_secs
        } else {
            config.http_timeout_secs
        },
        key_directory_url: or_default(config.key_directory_url, defaults.key_directory_url),
        update_manifest_url: or_default(config.update_manifest_url, defaults.update_manifest_url),
        current_version: or_default(config.current_version, defaults.current_version),
        log_filter: or_default(config.log_filter, defaults.log_filter),
        log_dir: if config.log_dir.as_os_str().is_empty() {
            defaults.log_dir
        } else {
            config.log_dir
        },
        data_dir: config.data_dir,
        prevent_auto_start: config.prevent_auto_start,
    }
}
