//! Reporting for cache operations whose failure must not reach the caller.

use super::metrics::CacheMetrics;
use std::fmt;
use tracing::warn;

/// The cache operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheOperation {
    /// Lookup before a read.
    Get,
    /// Populate after a miss.
    Set,
    /// Invalidation after a write.
    Delete,
    /// A cached payload could not be encoded or decoded.
    Codec,
}

impl CacheOperation {
    /// Returns the metric label for this operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::Delete => "delete",
            Self::Codec => "codec",
        }
    }
}

impl fmt::Display for CacheOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An absorbed cache failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheFailure {
    /// What the service was doing when the cache failed.
    pub operation: CacheOperation,
    /// The cache key involved.
    pub key: String,
    /// Rendered backend or codec error.
    pub message: String,
}

impl CacheFailure {
    /// Creates a failure record.
    pub fn new(operation: CacheOperation, key: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            operation,
            key: key.into(),
            message: error.to_string(),
        }
    }
}

/// Outcome of a cache write or invalidation the caller does not wait on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum BestEffort {
    /// The cache accepted the operation.
    Applied,
    /// The operation failed and was reported to the observer.
    Failed(CacheFailure),
}

impl BestEffort {
    /// Returns true if the cache accepted the operation.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Receives every cache failure the service absorbs.
pub trait CacheFailureObserver: Send + Sync {
    /// Called once per absorbed failure, before the request continues without
    /// the cache. Must not block.
    fn on_failure(&self, failure: &CacheFailure);
}

/// Logs failures with `tracing` and counts them in `snipvault_cache_failures_total`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CacheFailureObserver for TracingObserver {
    fn on_failure(&self, failure: &CacheFailure) {
        warn!(
            operation = %failure.operation,
            key = %failure.key,
            error = %failure.message,
            "Cache operation failed; continuing without cache"
        );
        CacheMetrics::failure(failure.operation.as_str());
    }
}
