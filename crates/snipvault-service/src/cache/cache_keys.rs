//! Cache key generators for consistent key naming.
//!
//! Search keys embed the raw query verbatim, so `"Py"`, `"py"` and `" py"` are
//! three distinct entries. User ids are fixed-width UUIDs, which keeps the
//! `:` separator from producing ambiguous keys.

use snipvault_core::UserId;

/// Prefix for all cache keys to namespace them.
const CACHE_PREFIX: &str = "snipvault:cache";

/// Key for a user's full snippet listing.
#[must_use]
pub fn listing_key(user_id: UserId) -> String {
    format!("{}:user_snippets:{}", CACHE_PREFIX, user_id)
}

/// Key for a user's results for one search query.
#[must_use]
pub fn search_key(user_id: UserId, query: &str) -> String {
    format!("{}:search:{}:{}", CACHE_PREFIX, user_id, query)
}

/// Key for a read with an optional search query.
#[must_use]
pub fn snippets_key(user_id: UserId, search: Option<&str>) -> String {
    match search {
        Some(query) => search_key(user_id, query),
        None => listing_key(user_id),
    }
}
