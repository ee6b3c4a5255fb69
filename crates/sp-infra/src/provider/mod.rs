//! Mail-provider client.
//!
//! Login resolves the account email from the provider's user-info endpoint
//! using the stored OAuth token. Unlock verifies the local key material.

pub mod armor;

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use sp_core::ports::{MailProviderPort, OAuthStatePort};
use sp_core::KeyPair;

use crate::session::FileSessionStore;
use armor::{verify_armor, ArmorKind};

#[derive(Debug, Deserialize)]
struct UserInfo {
    #[serde(default)]
    email: String,
}

pub struct HttpMailProvider {
    client: reqwest::Client,
    userinfo_url: String,
    session: Arc<FileSessionStore>,
}

impl HttpMailProvider {
    pub fn new(
        client: reqwest::Client,
        userinfo_url: impl Into<String>,
        session: Arc<FileSessionStore>,
    ) -> Self {
        Self {
            client,
            userinfo_url: userinfo_url.into(),
            session,
        }
    }
}

#[async_trait]
impl MailProviderPort for HttpMailProvider {
    async fn login(&self) -> anyhow::Result<()> {
        if self.userinfo_url.is_empty() {
            anyhow::bail!("Provider user-info URL is not configured");
        }
        let token = self
            .session
            .access_token()
            .ok_or_else(|| anyhow::anyhow!("No provider access token available"))?;

        let response = self
            .client
            .get(&self.userinfo_url)
            .bearer_auth(token.expose())
            .send()
            .await
            .context("Provider user-info request failed")?
            .error_for_status()
            .context("Provider rejected the access token")?;

        let user_info: UserInfo = response
            .json()
            .await
            .context("Failed to decode provider user info")?;
        if user_info.email.is_empty() {
            anyhow::bail!("Provider user info did not include an email address");
        }

        info!(email = %user_info.email, "provider login resolved account");
        self.session
            .set_email_address(user_info.email)
            .await
            .context("Failed to store resolved account email")?;
        Ok(())
    }

    async fn unlock(&self, keys: &KeyPair) -> anyhow::Result<()> {
        verify_armor(&keys.public_key, ArmorKind::PublicKey).context("Invalid public key")?;
        verify_armor(keys.private_key.expose(), ArmorKind::PrivateKey)
            .context("Invalid private key")?;

        debug!(fingerprint = %keys.fingerprint(), "local key material verified");
        Ok(())
    }
}
