//! In-process cache with per-entry expiry, backed by moka.

use super::CacheInterface;
use async_trait::async_trait;
use moka::future::Cache;
use moka::Expiry;
use snipvault_core::VaultResult;
use std::time::{Duration, Instant};
use tracing::debug;

/// Entry bound of [`InMemoryCache::new`].
pub const DEFAULT_MAX_ENTRIES: u64 = 10_000;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    ttl: Duration,
}

/// Each entry lives for the TTL it was last written with.
struct WrittenTtl;

impl Expiry<String, Entry> for WrittenTtl {
    fn expire_after_create(&self, _key: &String, entry: &Entry, _created_at: Instant) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// In-memory [`CacheInterface`] used when Redis is disabled.
///
/// Expired entries are evicted by moka's housekeeping, and the entry count is
/// bounded, so keys that are never read again do not accumulate.
#[derive(Clone)]
pub struct InMemoryCache {
    entries: Cache<String, Entry>,
}

impl InMemoryCache {
    /// Creates a cache holding at most [`DEFAULT_MAX_ENTRIES`] entries.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_ENTRIES)
    }

    /// Creates a cache holding at most `max_entries` entries.
    #[must_use]
    pub fn with_capacity(max_entries: u64) -> Self {
        let entries = Cache::builder()
            .max_capacity(max_entries)
            .expire_after(WrittenTtl)
            .build();
        Self { entries }
    }

    /// Returns the TTL a live entry was written with.
    pub async fn ttl_of(&self, key: &str) -> Option<Duration> {
        self.entries.get(key).await.map(|entry| entry.ttl)
    }

    /// Returns true if `key` holds a live entry.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries held after pending evictions have run.
    pub async fn entry_count(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCache")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}

#[async_trait]
impl CacheInterface for InMemoryCache {
    async fn get_raw(&self, key: &str) -> VaultResult<Option<String>> {
        let value = self.entries.get(key).await.map(|entry| entry.value);

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> VaultResult<()> {
        let entry = Entry {
            value: value.to_string(),
            ttl,
        };
        self.entries.insert(key.to_string(), entry).await;

        debug!("Cached key '{}' with TTL {}s", key, ttl.as_secs());
        Ok(())
    }

    async fn delete(&self, key: &str) -> VaultResult<bool> {
        let deleted = self.entries.contains_key(key);
        self.entries.invalidate(key).await;

        debug!("Deleted key '{}': {}", key, deleted);
        Ok(deleted)
    }
}
