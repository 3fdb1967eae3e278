//! Cache entry lifetimes.

use snipvault_config::CacheConfig;
use std::time::Duration;

/// TTLs applied when populating the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    /// Lifetime of a full listing entry.
    pub listing_ttl: Duration,
    /// Lifetime of a search result entry.
    pub search_ttl: Duration,
}

impl CachePolicy {
    /// Listing entries live for 5 minutes.
    pub const DEFAULT_LISTING_TTL: Duration = Duration::from_secs(300);
    /// Search entries live for 10 minutes.
    pub const DEFAULT_SEARCH_TTL: Duration = Duration::from_secs(600);

    /// Returns the TTL for a read with an optional search query.
    #[must_use]
    pub const fn ttl_for(&self, search: Option<&str>) -> Duration {
        match search {
            Some(_) => self.search_ttl,
            None => self.listing_ttl,
        }
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            listing_ttl: Self::DEFAULT_LISTING_TTL,
            search_ttl: Self::DEFAULT_SEARCH_TTL,
        }
    }
}

impl From<&CacheConfig> for CachePolicy {
    fn from(config: &CacheConfig) -> Self {
        Self {
            listing_ttl: config.listing_ttl(),
            search_ttl: config.search_ttl(),
        }
    }
}
