//! # Pure Data Module / 纯数据模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No business rules / 禁止业务规则**
//!
//! Missing values become empty facts; deciding what an empty URL means is
//! the job of the adapter that consumes it.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base directory for session and account files (may be empty)
    pub data_dir: PathBuf,

    /// Skip the automatic bootstrap attempt on start
    pub prevent_auto_start: bool,

    /// Mail provider user-info endpoint used by provider login
    pub provider_userinfo_url: String,

    /// HTTP timeout for provider, key directory and update calls, in seconds
    pub http_timeout_secs: u64,

    /// Base URL of the private-key backup directory
    pub key_directory_url: String,

    /// Update manifest URL; empty disables update checks
    pub update_manifest_url: String,

    /// Version of the running client compared against the manifest
    pub current_version: String,

    /// Tracing filter directives (overridden by RUST_LOG)
    pub log_filter: String,

    /// Directory for rolling log files; empty means stdout only
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// This method must NOT contain any validation.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            data_dir: PathBuf::from(str_at(toml_value, "general", "data_dir")),
            prevent_auto_start: toml_value
                .get("general")
                .and_then(|g| g.get("prevent_auto_start"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
            provider_userinfo_url: str_at(toml_value, "provider", "userinfo_url"),
            http_timeout_secs: toml_value
                .get("provider")
                .and_then(|p| p.get("timeout_secs"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            key_directory_url: str_at(toml_value, "keys", "directory_url"),
            update_manifest_url: str_at(toml_value, "updates", "manifest_url"),
            current_version: str_at(toml_value, "updates", "current_version"),
            log_filter: str_at(toml_value, "logging", "filter"),
            log_dir: PathBuf::from(str_at(toml_value, "logging", "log_dir")),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig
    pub fn empty() -> Self {
        Self {
            data_dir: PathBuf::new(),
            prevent_auto_start: false,
            provider_userinfo_url: String::new(),
            http_timeout_secs: 0,
            key_directory_url: String::new(),
            update_manifest_url: String::new(),
            current_version: String::new(),
            log_filter: String::new(),
            log_dir: PathBuf::new(),
        }
    }

    /// Create AppConfig with system-default paths for production use
    /// 生产环境使用：创建具有系统默认路径的 AppConfig
    ///
    /// The base directory is computed by the caller (e.g. with the `dirs` crate),
    /// as is the version of the running client.
    pub fn with_system_defaults(data_dir: PathBuf, current_version: impl Into<String>) -> Self {
        Self {
            log_dir: data_dir.join("logs"),
            data_dir,
            provider_userinfo_url: "https://www.googleapis.com/oauth2/v3/userinfo".to_string(),
            http_timeout_secs: 30,
            key_directory_url: "https://keys.sealpost.org".to_string(),
            current_version: current_version.into(),
            ..Self::empty()
        }
    }
}

fn str_at(toml_value: &toml::Value, section: &str, key: &str) -> String {
    toml_value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_parses_all_sections() {
        let toml_str = r#"
            [general]
            data_dir = "/var/lib/sealpost"
            prevent_auto_start = true

            [provider]
            userinfo_url = "https://provider.example/userinfo"
            timeout_secs = 10

            [keys]
            directory_url = "https://keys.example"

            [updates]
            manifest_url = "https://updates.example/latest.json"
            current_version = "1.2.0"

            [logging]
            filter = "sp_app=debug"
            log_dir = "/var/log/sealpost"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/var/lib/sealpost"));
        assert!(config.prevent_auto_start);
        assert_eq!(
            config.provider_userinfo_url,
            "https://provider.example/userinfo"
        );
        assert_eq!(config.http_timeout_secs, 10);
        assert_eq!(config.key_directory_url, "https://keys.example");
        assert_eq!(
            config.update_manifest_url,
            "https://updates.example/latest.json"
        );
        assert_eq!(config.current_version, "1.2.0");
        assert_eq!(config.log_filter, "sp_app=debug");
        assert_eq!(config.log_dir, PathBuf::from("/var/log/sealpost"));
    }

    #[test]
    fn test_from_toml_returns_empty_values_when_missing() {
        let toml_value: Value = toml::from_str("[general]\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        // Empty values are facts, not errors
        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_from_toml_clamps_negative_timeout() {
        let toml_value: Value = toml::from_str("[provider]\ntimeout_secs = -5\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.http_timeout_secs, 0);
    }

    #[test]
    fn test_with_system_defaults_builds_paths_from_base() {
        let config = AppConfig::with_system_defaults(PathBuf::from("/tmp/sealpost"), "2.4.0");

        assert_eq!(config.data_dir, PathBuf::from("/tmp/sealpost"));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/sealpost/logs"));
        assert!(!config.prevent_auto_start);
        assert!(config.update_manifest_url.is_empty());
        assert_eq!(config.current_version, "2.4.0");
    }
}
