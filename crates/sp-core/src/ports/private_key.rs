use async_trait::async_trait;

/// Private-key lifecycle service backed by the key server.
#[async_trait]
pub trait PrivateKeyPort: Send + Sync {
    async fn init(&self) -> anyhow::Result<()>;

    /// Whether an encrypted private-key backup exists remotely.
    async fn is_synced(&self) -> anyhow::Result<bool>;

    /// Release any partial key state held since `init`.
    async fn destroy(&self) -> anyhow::Result<()>;
}
