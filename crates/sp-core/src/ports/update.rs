use async_trait::async_trait;

/// Result of an update check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    UpToDate,
    Available { version: String },
    Disabled,
}

/// Update notifier; called fire-and-forget.
#[async_trait]
pub trait UpdateCheckPort: Send + Sync {
    async fn check_for_update(&self) -> anyhow::Result<UpdateStatus>;
}
