use async_trait::async_trait;

use crate::keys::KeyPair;

/// Mail-provider client used during bootstrap.
#[async_trait]
pub trait MailProviderPort: Send + Sync {
    /// Provider-side login with the stored access token.
    ///
    /// On success the account email address becomes known to the auth service.
    async fn login(&self) -> anyhow::Result<()>;

    /// Decrypt and verify the local key material.
    async fn unlock(&self, keys: &KeyPair) -> anyhow::Result<()>;
}
