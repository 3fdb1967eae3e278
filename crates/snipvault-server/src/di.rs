//! Dependency injection module using Shaku.
//!
//! `MonolithicModule` holds the database pool, the MySQL repository, the cache
//! backend and the snippet service. When Redis is disabled the cache binding is
//! overridden with an in-process cache.

use shaku::ModuleBuilder;
use snipvault_config::{CacheConfig, RedisConfig};
use snipvault_core::{module, HasComponent, VaultResult};
use snipvault_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, MySqlSnippetRepository,
};
use snipvault_service::{
    create_redis_pool, CacheInterface, CachePolicy, InMemoryCache, RedisCacheService,
    RedisCacheServiceParameters, SnippetService, SnippetServiceImpl, SnippetServiceImplParameters,
};
use std::sync::Arc;
use tracing::info;

module! {
    pub MonolithicModule {
        components = [
            DatabasePool,
            MySqlSnippetRepository,
            RedisCacheService,
            SnippetServiceImpl,
        ],
        providers = [],
    }
}

/// Prepares a [`MonolithicModule`] builder over an already connected pool.
///
/// The returned builder can still take overrides before `build()`.
pub fn monolithic_module_builder(
    db_pool: &DatabasePool,
    redis_config: &RedisConfig,
    cache_config: &CacheConfig,
) -> VaultResult<ModuleBuilder<MonolithicModule>> {
    let builder = MonolithicModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .with_component_parameters::<SnippetServiceImpl>(SnippetServiceImplParameters {
            policy: CachePolicy::from(cache_config),
            ..SnippetServiceImplParameters::default()
        });

    if redis_config.enabled {
        let pool = create_redis_pool(redis_config)?;
        info!("Using Redis cache (pool size {})", redis_config.pool_size);
        Ok(builder.with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
            pool: Arc::new(pool),
        }))
    } else {
        info!(
            "Redis disabled, using in-memory cache (max {} entries)",
            cache_config.memory_max_entries
        );
        let cache = InMemoryCache::with_capacity(cache_config.memory_max_entries);
        Ok(builder.with_component_override::<dyn CacheInterface>(Box::new(cache)))
    }
}

/// Builds the module used by the server binary.
pub fn build_monolithic_module(
    db_pool: &DatabasePool,
    redis_config: &RedisConfig,
    cache_config: &CacheConfig,
) -> VaultResult<Arc<MonolithicModule>> {
    let module = monolithic_module_builder(db_pool, redis_config, cache_config)?.build();
    Ok(Arc::new(module))
}

/// Resolves the components the server needs after startup.
pub trait ServiceResolver {
    fn snippet_service(&self) -> Arc<dyn SnippetService>;

    /// The pool behind the repository, for migrations and shutdown.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl ServiceResolver for MonolithicModule {
    fn snippet_service(&self) -> Arc<dyn SnippetService> {
        self.resolve()
    }

    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use snipvault_config::DatabaseConfig;
    use snipvault_core::{NewSnippet, Snippet, UserId};
    use snipvault_repository::SnippetRepository;
    use snipvault_service::CreateSnippetRequest;
    use sqlx::mysql::MySqlPoolOptions;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct CountingRepository {
        queries: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl SnippetRepository for CountingRepository {
        async fn find_by_owner(&self, _owner: UserId) -> VaultResult<Vec<Snippet>> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }

        async fn search_by_owner(&self, _owner: UserId, _query: &str) -> VaultResult<Vec<Snippet>> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }

        async fn create(&self, owner: UserId, snippet: NewSnippet) -> VaultResult<Snippet> {
            Ok(Snippet::create(owner, snippet))
        }
    }

    /// A pool that never connects unless queried.
    fn lazy_pool() -> DatabasePool {
        let pool = MySqlPoolOptions::new()
            .connect_lazy(&DatabaseConfig::default().url)
            .unwrap();
        DatabasePool::with_pool(pool)
    }

    fn redis_disabled() -> RedisConfig {
        RedisConfig {
            enabled: false,
            ..RedisConfig::default()
        }
    }

    fn create_request() -> CreateSnippetRequest {
        CreateSnippetRequest {
            title: "t".to_string(),
            content: "c".to_string(),
            language: "go".to_string(),
            tags: vec![],
        }
    }

    #[test]
    fn test_module_resolves_every_interface() {
        fn _assert_has_snippet_service<T: HasComponent<dyn SnippetService>>() {}
        fn _assert_has_repository<T: HasComponent<dyn SnippetRepository>>() {}
        fn _assert_has_cache<T: HasComponent<dyn CacheInterface>>() {}
        fn _assert_has_database_pool<T: HasComponent<dyn DatabasePoolInterface>>() {}

        _assert_has_snippet_service::<MonolithicModule>();
        _assert_has_repository::<MonolithicModule>();
        _assert_has_cache::<MonolithicModule>();
        _assert_has_database_pool::<MonolithicModule>();
    }

    #[tokio::test]
    async fn test_wired_service_caches_reads() {
        let repository = CountingRepository::default();
        let module = monolithic_module_builder(&lazy_pool(), &redis_disabled(), &CacheConfig::default())
            .unwrap()
            .with_component_override::<dyn SnippetRepository>(Box::new(repository.clone()))
            .build();
        let service = module.snippet_service();
        let user = UserId::new();

        service.fetch_snippets(user, None).await.unwrap();
        service.fetch_snippets(user, None).await.unwrap();
        assert_eq!(repository.queries.load(Ordering::SeqCst), 1);

        service.create_snippet(user, create_request()).await.unwrap();
        service.fetch_snippets(user, None).await.unwrap();
        assert_eq!(repository.queries.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_disabled_redis_binds_memory_cache() {
        let module = build_monolithic_module(&lazy_pool(), &redis_disabled(), &CacheConfig::default())
            .unwrap();
        let cache: Arc<dyn CacheInterface> = module.resolve();

        cache.set_raw("k", "v", Duration::from_secs(60)).await.unwrap();
        assert_eq!(cache.get_raw("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn test_enabled_redis_binds_redis_cache_lazily() {
        let config = RedisConfig {
            url: "redis://127.0.0.1:1".to_string(),
            pool_size: 1,
            enabled: true,
        };
        let module = build_monolithic_module(&lazy_pool(), &config, &CacheConfig::default()).unwrap();

        let cache: Arc<dyn CacheInterface> = module.resolve();

        let result = cache.get_raw("k").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_cache_config_reaches_service() {
        let cache = InMemoryCache::new();
        let cache_config = CacheConfig {
            listing_ttl_secs: 5,
            search_ttl_secs: 7,
            ..CacheConfig::default()
        };
        let module = monolithic_module_builder(&lazy_pool(), &redis_disabled(), &cache_config)
            .unwrap()
            .with_component_override::<dyn SnippetRepository>(Box::new(CountingRepository::default()))
            .with_component_override::<dyn CacheInterface>(Box::new(cache.clone()))
            .build();
        let user = UserId::new();

        module.snippet_service().fetch_snippets(user, Some("x")).await.unwrap();

        let key = snipvault_service::cache_keys::search_key(user, "x");
        assert_eq!(cache.ttl_of(&key).await, Some(Duration::from_secs(7)));
    }
}
