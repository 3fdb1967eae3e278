//! Caching infrastructure for the service layer.
//!
//! Snippet listings and search results are cached per user under keys from
//! [`cache_keys`]. Entries are written on read misses and the listing entry is
//! deleted whenever the user creates a snippet.

mod cache_interface;
pub mod cache_keys;
mod codec;
mod memory_cache;
pub mod metrics;
mod observer;
mod policy;
mod redis_cache;

pub use cache_interface::CacheInterface;
pub use codec::{JsonCodec, PayloadCodec};
pub use memory_cache::{InMemoryCache, DEFAULT_MAX_ENTRIES};
pub use observer::{BestEffort, CacheFailure, CacheFailureObserver, CacheOperation, TracingObserver};
pub use policy::CachePolicy;
pub use redis_cache::{create_redis_pool, RedisCacheService, RedisCacheServiceParameters};
