//! File-based account store
//!
//! Each account owns `<accounts_dir>/<email>/keypair.json`. A missing key
//! pair file means the account has no local keys yet.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use sp_core::ports::{AccountStorePort, AuthPort};
use sp_core::{KeyPair, SecretString};

pub const DEFAULT_ACCOUNTS_DIR: &str = "accounts";
pub const KEYPAIR_FILE: &str = "keypair.json";

#[derive(Serialize, Deserialize)]
struct StoredKeyPair {
    #[serde(default)]
    key_id: Option<String>,
    public_key: String,
    private_key: String,
}

pub struct FileAccountStore {
    accounts_dir: PathBuf,
    auth: Arc<dyn AuthPort>,
}

impl FileAccountStore {
    pub fn new(accounts_dir: PathBuf, auth: Arc<dyn AuthPort>) -> Self {
        Self { accounts_dir, auth }
    }

    pub fn with_defaults(base_dir: PathBuf, auth: Arc<dyn AuthPort>) -> Self {
        Self::new(base_dir.join(DEFAULT_ACCOUNTS_DIR), auth)
    }

    /// Write the key pair for `email_address`, replacing any previous one.
    pub async fn save_key_pair(&self, email_address: &str, keys: &KeyPair) -> anyhow::Result<()> {
        let account_dir = self.account_dir(email_address)?;
        fs::create_dir_all(&account_dir).await?;

        let stored = StoredKeyPair {
            key_id: keys.key_id.clone(),
            public_key: keys.public_key.clone(),
            private_key: keys.private_key.expose().to_string(),
        };
        let json = serde_json::to_string_pretty(&stored)
            .map_err(|e| anyhow::anyhow!("Failed to serialize key pair: {e}"))?;

        let mut file = fs::File::create(account_dir.join(KEYPAIR_FILE))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create key pair file: {e}"))?;
        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write key pair file: {e}"))?;
        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync key pair file: {e}"))?;
        Ok(())
    }

    fn account_dir(&self, email_address: &str) -> anyhow::Result<PathBuf> {
        let valid = !email_address.is_empty()
            && !email_address.starts_with('.')
            && !email_address.contains(['/', '\\'])
            && email_address.contains('@');
        if !valid {
            anyhow::bail!("Invalid account email address: {email_address:?}");
        }
        Ok(self.accounts_dir.join(email_address))
    }

    async fn read_key_pair(path: &Path) -> anyhow::Result<Option<KeyPair>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read key pair file: {e}"))?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let stored: StoredKeyPair = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse key pair: {e}"))?;
        let mut keys = KeyPair::new(stored.public_key, SecretString::new(stored.private_key));
        keys.key_id = stored.key_id;
        Ok(Some(keys))
    }
}

#[async_trait]
impl AccountStorePort for FileAccountStore {
    async fn init(&self) -> anyhow::Result<Option<KeyPair>> {
        let email_address = self
            .auth
            .email_address()
            .ok_or_else(|| anyhow::anyhow!("No account email address is known"))?;
        let account_dir = self.account_dir(&email_address)?;
        fs::create_dir_all(&account_dir)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to open account directory: {e}"))?;

        let keys = Self::read_key_pair(&account_dir.join(KEYPAIR_FILE)).await?;
        debug!(
            account_dir = %account_dir.display(),
            has_keys = keys.is_some(),
            "account store opened"
        );
        Ok(keys)
    }
}
