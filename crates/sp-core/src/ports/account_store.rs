use async_trait::async_trait;

use crate::keys::KeyPair;

/// Local encrypted account store.
#[async_trait]
pub trait AccountStorePort: Send + Sync {
    /// Open the store for the current account.
    ///
    /// - `Ok(Some(keys))`: returning user with local key material
    /// - `Ok(None)`: new or incomplete account
    /// - `Err(_)`: storage unavailable or corrupt
    async fn init(&self) -> anyhow::Result<Option<KeyPair>>;
}
