//! Database connection pool management.

use async_trait::async_trait;
use snipvault_config::DatabaseConfig;
use shaku::Component;
use snipvault_core::{Interface, VaultError, VaultResult};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::{info, warn};

/// The MySQL pool as repositories see it.
#[async_trait]
pub trait DatabasePoolInterface: Interface + Send + Sync {
    fn inner(&self) -> &MySqlPool;

    /// Applies the embedded `migrations/` directory.
    async fn run_migrations(&self) -> VaultResult<()>;

    /// Closes the database pool.
    async fn close(&self);
}

/// Pooled MySQL connections for the snippet store.
///
/// As a component it takes an already connected pool as its parameter.
#[derive(Component)]
#[shaku(interface = DatabasePoolInterface)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Connects a new pool using `config`.
    pub async fn connect(config: &DatabaseConfig) -> VaultResult<Self> {
        info!("Connecting to MySQL database...");

        let pool = MySqlPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect(&config.url)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                VaultError::Database(format!("Failed to connect: {}", e))
            })?;

        info!("MySQL connection pool established");
        Ok(Self::with_pool(pool))
    }

    /// Wraps a pool that was opened elsewhere.
    #[must_use]
    pub fn with_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn inner(&self) -> &MySqlPool {
        &self.pool
    }

    async fn run_migrations(&self) -> VaultResult<()> {
        info!("Running database migrations...");
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| VaultError::Database(format!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }

    async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}
