//! Error type shared by every layer, and the JSON shape it is reported in.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised anywhere in Snipvault.
///
/// `Cache` is produced by cache backends and absorbed by the snippet service;
/// it never reaches a client. `Database` is a store failure and is fatal for the
/// request. `Validation` and the identity variants are the caller's fault.
#[derive(Error, Debug)]
pub enum VaultError {
    /// A request field failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A row the caller expected is missing.
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// No usable identity on the request.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bearer token failed verification.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Bearer token is past its `exp`.
    #[error("Token expired")]
    TokenExpired,

    /// The snippet store rejected or failed a query.
    #[error("Database error: {0}")]
    Database(String),

    /// The cache store is unreachable or returned an error.
    #[error("Cache error: {0}")]
    Cache(String),

    /// Startup configuration is unusable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl VaultError {
    /// HTTP status this error maps to.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Unauthorized(_) | Self::InvalidToken(_) | Self::TokenExpired => 401,
            Self::NotFound { .. } => 404,
            Self::Database(_) | Self::Cache(_) | Self::Configuration(_) | Self::Internal(_) => 500,
        }
    }

    /// Stable code used in the `error.code` field of responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::InvalidToken(_) => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    #[must_use]
    pub fn not_found(resource_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    #[must_use]
    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache(message.into())
    }

    /// True for failures whose detail must not be shown to clients.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for VaultError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON error: {}", err))
    }
}

/// The `error` object of a failed API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    /// Per-field problems, present only for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// One rejected request field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl ErrorResponse {
    /// Reports `error` with its own message.
    #[must_use]
    pub fn from_error(error: &VaultError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }

    /// Like [`ErrorResponse::from_error`], but a 5xx error is reported with
    /// `public_message` in place of its own.
    #[must_use]
    pub fn masked(error: &VaultError, public_message: &str) -> Self {
        let mut response = Self::from_error(error);
        if error.is_server_error() {
            response.message = public_message.to_string();
        }
        response
    }

    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}
