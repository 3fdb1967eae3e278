//! HS256 bearer tokens: issuing (for tooling and tests) and verification.

use super::Claims;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use snipvault_config::SecurityConfig;
use snipvault_core::{UserId, VaultError, VaultResult};
use std::sync::Arc;
use tracing::{debug, warn};

/// Verifies bearer tokens against the configured secret, issuer and audience.
#[derive(Clone)]
pub struct TokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: Arc<SecurityConfig>,
    validation: Validation,
}

impl TokenProvider {
    #[must_use]
    pub fn new(config: Arc<SecurityConfig>) -> Self {
        let secret = config.jwt_secret.as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.jwt_issuer]);
        validation.set_audience(&[&config.jwt_audience]);
        validation.validate_nbf = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            config,
            validation,
        }
    }

    /// Issues a token for `user_id`.
    pub fn generate_access_token(&self, user_id: UserId) -> VaultResult<String> {
        let claims = Claims::issue(user_id, &self.config, Utc::now());

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| VaultError::Internal(format!("Failed to sign token: {}", e)))
    }

    /// Verifies signature, issuer, audience and time bounds.
    pub fn validate_token(&self, token: &str) -> VaultResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                warn!("Rejected bearer token: {}", e);
                match e.kind() {
                    ErrorKind::ExpiredSignature => VaultError::TokenExpired,
                    ErrorKind::InvalidIssuer => VaultError::InvalidToken("Wrong issuer".to_string()),
                    ErrorKind::InvalidAudience => {
                        VaultError::InvalidToken("Wrong audience".to_string())
                    }
                    _ => VaultError::InvalidToken("Malformed or unsigned token".to_string()),
                }
            })
    }

    /// Resolves a token to the user it identifies.
    pub fn authenticate(&self, token: &str) -> VaultResult<UserId> {
        let user_id = self.validate_token(token)?.subject()?;
        debug!("Authenticated user {}", user_id);
        Ok(user_id)
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("issuer", &self.config.jwt_issuer)
            .field("audience", &self.config.jwt_audience)
            .finish_non_exhaustive()
    }
}
