//! File-based session store
//!
//! This module provides a file-based implementation of `AuthPort` and
//! `OAuthStatePort`, persisting the account identity and provider token to a
//! local JSON file in the application data directory.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use sp_core::ports::{AuthPort, OAuthStatePort};
use sp_core::{AccessToken, SecretString};

pub const DEFAULT_SESSION_FILE: &str = "session.json";

#[derive(Default, Clone, Serialize, Deserialize)]
struct SessionRecord {
    #[serde(default)]
    email_address: Option<String>,
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    credentials_stored_at: Option<DateTime<Utc>>,
}

pub struct FileSessionStore {
    session_file_path: PathBuf,
    record: RwLock<SessionRecord>,
}

impl FileSessionStore {
    /// Create store with custom file path
    pub fn new(session_file_path: PathBuf) -> Self {
        Self {
            session_file_path,
            record: RwLock::new(SessionRecord::default()),
        }
    }

    /// Create store with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_SESSION_FILE))
    }

    /// Record and persist the account email resolved by the provider login.
    pub async fn set_email_address(&self, email_address: String) -> anyhow::Result<()> {
        let mut record = self.read_record().clone();
        record.email_address = Some(email_address);

        self.persist(&record).await?;
        debug!(path = %self.session_file_path.display(), "account email stored");
        *self.write_record() = record;
        Ok(())
    }

    pub fn credentials_stored_at(&self) -> Option<DateTime<Utc>> {
        self.read_record().credentials_stored_at
    }

    fn read_record(&self) -> RwLockReadGuard<'_, SessionRecord> {
        self.record
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_record(&self) -> RwLockWriteGuard<'_, SessionRecord> {
        self.record
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.session_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    async fn load(&self) -> anyhow::Result<SessionRecord> {
        if !self.session_file_path.exists() {
            return Ok(SessionRecord::default());
        }

        let content = fs::read_to_string(&self.session_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read session file: {e}"))?;

        if content.trim().is_empty() {
            return Ok(SessionRecord::default());
        }

        serde_json::from_str(&content).map_err(|e| anyhow::anyhow!("Failed to parse session: {e}"))
    }

    async fn persist(&self, record: &SessionRecord) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| anyhow::anyhow!("Failed to serialize session: {e}"))?;

        let mut file = fs::File::create(&self.session_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create session file: {e}"))?;

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write session file: {e}"))?;

        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync session file: {e}"))?;

        Ok(())
    }
}

#[async_trait]
impl AuthPort for FileSessionStore {
    async fn init(&self) -> anyhow::Result<()> {
        let record = self.load().await?;
        debug!(
            has_email = record.email_address.is_some(),
            has_token = record.access_token.is_some(),
            path = %self.session_file_path.display(),
            "session loaded"
        );
        *self.write_record() = record;
        Ok(())
    }

    fn email_address(&self) -> Option<String> {
        self.read_record().email_address.clone()
    }

    async fn store_credentials(&self) -> anyhow::Result<()> {
        let mut record = self.read_record().clone();
        if record.email_address.is_none() {
            anyhow::bail!("No account email address to store credentials for");
        }
        record.credentials_stored_at = Some(Utc::now());

        self.persist(&record).await?;
        info!(path = %self.session_file_path.display(), "credentials stored");
        *self.write_record() = record;
        Ok(())
    }
}

impl OAuthStatePort for FileSessionStore {
    fn access_token(&self) -> Option<AccessToken> {
        self.read_record()
            .access_token
            .as_deref()
            .map(SecretString::new)
    }
}
