//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use snipvault_core::{Interface, VaultResult};
use std::time::Duration;

/// Key-value cache with per-entry expiry.
///
/// Values are opaque strings; encoding is the caller's concern (see
/// [`PayloadCodec`](super::PayloadCodec)). Every error is a
/// [`VaultError::Cache`](snipvault_core::VaultError::Cache).
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Gets a raw value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> VaultResult<Option<String>>;

    /// Sets a raw value with a TTL, replacing any existing value and expiry.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> VaultResult<()>;

    /// Deletes a value from the cache.
    ///
    /// Returns `true` if the key existed. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> VaultResult<bool>;
}
