//! Prometheus metrics for the snippet cache.

use metrics::{counter, describe_counter};

/// Metric names for the snippet cache.
pub mod names {
    /// Reads answered from the cache.
    pub const CACHE_HITS_TOTAL: &str = "snipvault_cache_hits_total";
    /// Reads that fell through to the snippet store.
    pub const CACHE_MISSES_TOTAL: &str = "snipvault_cache_misses_total";
    /// Absorbed cache failures, labelled by operation.
    pub const CACHE_FAILURES_TOTAL: &str = "snipvault_cache_failures_total";
    /// Listing entries deleted after a write.
    pub const CACHE_INVALIDATIONS_TOTAL: &str = "snipvault_cache_invalidations_total";
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(
        names::CACHE_HITS_TOTAL,
        "Total number of snippet reads served from the cache"
    );
    describe_counter!(
        names::CACHE_MISSES_TOTAL,
        "Total number of snippet reads that queried the store"
    );
    describe_counter!(
        names::CACHE_FAILURES_TOTAL,
        "Total number of cache operations that failed and were ignored"
    );
    describe_counter!(
        names::CACHE_INVALIDATIONS_TOTAL,
        "Total number of listing cache entries invalidated by writes"
    );
}

/// Cache metrics recorder.
#[derive(Clone)]
pub struct CacheMetrics;

impl CacheMetrics {
    /// Record a cache hit.
    pub fn hit(kind: &'static str) {
        counter!(names::CACHE_HITS_TOTAL, "kind" => kind).increment(1);
    }

    /// Record a cache miss.
    pub fn miss(kind: &'static str) {
        counter!(names::CACHE_MISSES_TOTAL, "kind" => kind).increment(1);
    }

    /// Record an absorbed cache failure.
    pub fn failure(operation: &'static str) {
        counter!(names::CACHE_FAILURES_TOTAL, "operation" => operation).increment(1);
    }

    /// Record an invalidated entry.
    pub fn invalidated() {
        counter!(names::CACHE_INVALIDATIONS_TOTAL).increment(1);
    }
}
