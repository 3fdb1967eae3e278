//! Result type aliases for Snipvault.

use crate::VaultError;

/// A specialized `Result` type for Snipvault operations.
pub type VaultResult<T> = Result<T, VaultError>;
