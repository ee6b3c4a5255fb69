use async_trait::async_trait;

use crate::bootstrap::BootstrapFailure;

/// User-facing error sink (dialog).
#[async_trait]
pub trait ErrorReporterPort: Send + Sync {
    async fn report(&self, failure: &BootstrapFailure);
}
