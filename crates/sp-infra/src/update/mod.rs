//! Update manifest checker.

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

use sp_core::ports::{UpdateCheckPort, UpdateStatus};

#[derive(Debug, Deserialize)]
struct UpdateManifest {
    version: String,
}

pub struct HttpUpdateChecker {
    client: reqwest::Client,
    manifest_url: String,
    current_version: String,
}

impl HttpUpdateChecker {
    pub fn new(
        client: reqwest::Client,
        manifest_url: impl Into<String>,
        current_version: impl Into<String>,
    ) -> Self {
        Self {
            client,
            manifest_url: manifest_url.into(),
            current_version: current_version.into(),
        }
    }
}

#[async_trait]
impl UpdateCheckPort for HttpUpdateChecker {
    async fn check_for_update(&self) -> anyhow::Result<UpdateStatus> {
        if self.manifest_url.is_empty() {
            return Ok(UpdateStatus::Disabled);
        }

        let manifest: UpdateManifest = self
            .client
            .get(&self.manifest_url)
            .send()
            .await
            .context("Update manifest request failed")?
            .error_for_status()
            .context("Update manifest unavailable")?
            .json()
            .await
            .context("Failed to decode update manifest")?;

        if is_newer(&manifest.version, &self.current_version)? {
            Ok(UpdateStatus::Available {
                version: manifest.version,
            })
        } else {
            Ok(UpdateStatus::UpToDate)
        }
    }
}

/// Parse `v1.2.3` / `1.2.3-beta` into numeric components; pre-release
/// suffixes are ignored.
fn parse_version(version: &str) -> Option<Vec<u64>> {
    let core = version.trim().trim_start_matches('v');
    let core = core.split(['-', '+']).next()?;
    core.split('.').map(|part| part.parse().ok()).collect()
}

fn is_newer(candidate: &str, current: &str) -> anyhow::Result<bool> {
    let candidate_parts =
        parse_version(candidate).with_context(|| format!("Invalid manifest version: {candidate}"))?;
    let current_parts =
        parse_version(current).with_context(|| format!("Invalid current version: {current}"))?;

    let len = candidate_parts.len().max(current_parts.len());
    let pad = |parts: &[u64]| {
        let mut padded = parts.to_vec();
        padded.resize(len, 0);
        padded
    };
    Ok(pad(&candidate_parts) > pad(&current_parts))
}
