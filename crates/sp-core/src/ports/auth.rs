use async_trait::async_trait;

/// Authentication and credential storage service.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Load the persisted identity. Failure means no identity can be established.
    async fn init(&self) -> anyhow::Result<()>;

    /// Email address of the current account, if known.
    fn email_address(&self) -> Option<String>;

    /// Persist credentials after the local keys were unlocked.
    async fn store_credentials(&self) -> anyhow::Result<()>;
}
