//! Cache payload encoding.

use snipvault_core::{Snippet, VaultResult};

/// Encodes snippet sequences for storage in the cache.
///
/// `decode(encode(s))` must equal `s` for any sequence, including the empty one.
pub trait PayloadCodec: Send + Sync {
    /// Serializes `snippets` to a cache value.
    fn encode(&self, snippets: &[Snippet]) -> VaultResult<String>;

    /// Parses a cache value written by [`PayloadCodec::encode`].
    fn decode(&self, payload: &str) -> VaultResult<Vec<Snippet>>;
}

/// JSON payloads via serde_json.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl PayloadCodec for JsonCodec {
    fn encode(&self, snippets: &[Snippet]) -> VaultResult<String> {
        Ok(serde_json::to_string(snippets)?)
    }

    fn decode(&self, payload: &str) -> VaultResult<Vec<Snippet>> {
        Ok(serde_json::from_str(payload)?)
    }
}
