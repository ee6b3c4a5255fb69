use async_trait::async_trait;

use crate::route::Route;

/// View router.
#[async_trait]
pub trait RouterPort: Send + Sync {
    async fn navigate(&self, route: Route);
}
