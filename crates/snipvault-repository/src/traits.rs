//! Repository trait definitions.

use async_trait::async_trait;
use snipvault_core::{Interface, NewSnippet, Snippet, UserId, VaultResult};

/// Snippet store.
///
/// Every query is scoped to a single owner and returns snippets newest first.
#[async_trait]
pub trait SnippetRepository: Interface + Send + Sync {
    /// Lists all snippets owned by `owner`.
    async fn find_by_owner(&self, owner: UserId) -> VaultResult<Vec<Snippet>>;

    /// Lists the owner's snippets whose title contains `query` (ignoring case)
    /// or whose tags contain `query` exactly.
    async fn search_by_owner(&self, owner: UserId, query: &str) -> VaultResult<Vec<Snippet>>;

    /// Persists a new snippet for `owner` and returns the stored record.
    async fn create(&self, owner: UserId, snippet: NewSnippet) -> VaultResult<Snippet>;
}
