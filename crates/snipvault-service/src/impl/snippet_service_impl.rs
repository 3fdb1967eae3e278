//! Cache-aside snippet service.

use crate::cache::metrics::CacheMetrics;
use crate::cache::{
    cache_keys, BestEffort, CacheFailure, CacheFailureObserver, CacheInterface, CacheOperation,
    CachePolicy, JsonCodec, PayloadCodec, TracingObserver,
};
use crate::dto::CreateSnippetRequest;
use crate::snippet_service::SnippetService;
use async_trait::async_trait;
use shaku::Component;
use snipvault_core::{Snippet, UserId, ValidateExt, VaultResult};
use snipvault_repository::SnippetRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Snippet service backed by a repository with a cache in front of reads.
///
/// Cache failures never fail a request: a failed lookup is a miss, a failed
/// populate or invalidation is reported to the [`CacheFailureObserver`] and
/// otherwise ignored. Store failures are returned to the caller.
///
/// As a component the repository and cache are injected; codec, observer and
/// TTL policy are parameters defaulting to JSON, tracing and the stock TTLs.
#[derive(Component)]
#[shaku(interface = SnippetService)]
pub struct SnippetServiceImpl {
    #[shaku(inject)]
    repository: Arc<dyn SnippetRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    #[shaku(default = Arc::new(JsonCodec))]
    codec: Arc<dyn PayloadCodec>,
    #[shaku(default = Arc::new(TracingObserver))]
    observer: Arc<dyn CacheFailureObserver>,
    #[shaku(default)]
    policy: CachePolicy,
}

impl SnippetServiceImpl {
    /// Creates a service with JSON payloads, the default TTLs, and tracing for
    /// absorbed failures.
    pub fn new(repository: Arc<dyn SnippetRepository>, cache: Arc<dyn CacheInterface>) -> Self {
        Self {
            repository,
            cache,
            codec: Arc::new(JsonCodec),
            observer: Arc::new(TracingObserver),
            policy: CachePolicy::default(),
        }
    }

    /// Replaces the TTL policy.
    #[must_use]
    pub fn with_policy(mut self, policy: CachePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the payload codec.
    #[must_use]
    pub fn with_codec(mut self, codec: Arc<dyn PayloadCodec>) -> Self {
        self.codec = codec;
        self
    }

    /// Replaces the failure observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn CacheFailureObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Returns the TTL policy in effect.
    #[must_use]
    pub const fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Drops the user's cached listing.
    pub async fn invalidate_listing(&self, user_id: UserId) -> BestEffort {
        let key = cache_keys::listing_key(user_id);

        match self.cache.delete(&key).await {
            Ok(existed) => {
                if existed {
                    CacheMetrics::invalidated();
                }
                debug!("Invalidated listing for user {} (existed: {})", user_id, existed);
                BestEffort::Applied
            }
            Err(e) => self.report(CacheFailure::new(CacheOperation::Delete, key, e)),
        }
    }

    /// Reads and decodes a cached result. Any failure reads as a miss.
    async fn lookup(&self, key: &str) -> Option<Vec<Snippet>> {
        let payload = match self.cache.get_raw(key).await {
            Ok(payload) => payload?,
            Err(e) => {
                let _ = self.report(CacheFailure::new(CacheOperation::Get, key, e));
                return None;
            }
        };

        match self.codec.decode(&payload) {
            Ok(snippets) => Some(snippets),
            Err(e) => {
                let _ = self.report(CacheFailure::new(CacheOperation::Codec, key, e));
                None
            }
        }
    }

    async fn populate(&self, key: &str, snippets: &[Snippet], search: Option<&str>) -> BestEffort {
        let payload = match self.codec.encode(snippets) {
            Ok(payload) => payload,
            Err(e) => return self.report(CacheFailure::new(CacheOperation::Codec, key, e)),
        };

        match self.cache.set_raw(key, &payload, self.policy.ttl_for(search)).await {
            Ok(()) => BestEffort::Applied,
            Err(e) => self.report(CacheFailure::new(CacheOperation::Set, key, e)),
        }
    }

    fn report(&self, failure: CacheFailure) -> BestEffort {
        self.observer.on_failure(&failure);
        BestEffort::Failed(failure)
    }
}

const fn read_kind(search: Option<&str>) -> &'static str {
    match search {
        Some(_) => "search",
        None => "listing",
    }
}

#[async_trait]
impl SnippetService for SnippetServiceImpl {
    async fn fetch_snippets(&self, user_id: UserId, search: Option<&str>) -> VaultResult<Vec<Snippet>> {
        let kind = read_kind(search);
        let key = cache_keys::snippets_key(user_id, search);

        if let Some(cached) = self.lookup(&key).await {
            debug!("Cache hit for {} of user {}", kind, user_id);
            CacheMetrics::hit(kind);
            return Ok(cached);
        }
        CacheMetrics::miss(kind);

        let snippets = match search {
            Some(query) => self.repository.search_by_owner(user_id, query).await?,
            None => self.repository.find_by_owner(user_id).await?,
        };
        debug!("Loaded {} snippets for {} of user {}", snippets.len(), kind, user_id);

        let _ = self.populate(&key, &snippets, search).await;

        Ok(snippets)
    }

    async fn create_snippet(&self, user_id: UserId, request: CreateSnippetRequest) -> VaultResult<Snippet> {
        request.validate_request()?;

        let snippet = self.repository.create(user_id, request.into()).await?;
        info!("Snippet created: {} for user {}", snippet.id, user_id);

        // Search entries for this user are not touched and expire on their TTL.
        let _ = self.invalidate_listing(user_id).await;

        Ok(snippet)
    }
}

impl std::fmt::Debug for SnippetServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnippetServiceImpl")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
