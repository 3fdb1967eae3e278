//! Redis-based cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool, PoolConfig, Runtime};
use shaku::Component;
use snipvault_config::RedisConfig;
use snipvault_core::{VaultError, VaultResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Creates a Redis connection pool from configuration.
///
/// Connections are opened lazily, so an unreachable server surfaces as cache
/// failures on first use rather than here.
pub fn create_redis_pool(config: &RedisConfig) -> VaultResult<Pool> {
    let mut cfg = deadpool_redis::Config::from_url(&config.url);
    cfg.pool = Some(PoolConfig::new(config.pool_size));
    cfg.create_pool(Some(Runtime::Tokio1))
        .map_err(|e| VaultError::Cache(format!("Failed to create Redis pool: {}", e)))
}

/// Redis-based cache service.
///
/// Registered as the module's [`CacheInterface`] component; the pool comes in
/// as its parameter.
#[derive(Component)]
#[shaku(interface = CacheInterface)]
pub struct RedisCacheService {
    /// Redis connection pool.
    pool: Arc<Pool>,
}

impl RedisCacheService {
    /// Create a new Redis cache service.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> VaultResult<deadpool_redis::Connection> {
        self.pool
            .get()
            .await
            .map_err(|e| VaultError::Cache(format!("Failed to get Redis connection: {}", e)))
    }
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    async fn get_raw(&self, key: &str) -> VaultResult<Option<String>> {
        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn.get(key).await.map_err(|e| {
            VaultError::Cache(format!("Failed to get key '{}': {}", key, e))
        })?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> VaultResult<()> {
        let mut conn = self.get_conn().await?;
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs).await.map_err(|e| {
            VaultError::Cache(format!("Failed to set key '{}': {}", key, e))
        })?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete(&self, key: &str) -> VaultResult<bool> {
        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn.del(key).await.map_err(|e| {
            VaultError::Cache(format!("Failed to delete key '{}': {}", key, e))
        })?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }
}

impl std::fmt::Debug for RedisCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheService")
            .field("max_size", &self.pool.status().max_size)
            .finish()
    }
}
