//! Identity claims carried by a bearer token.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use snipvault_config::SecurityConfig;
use snipvault_core::{UserId, VaultError, VaultResult};
use uuid::Uuid;

/// Registered JWT claims. `sub` is the hyphenated [`UserId`] of the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    pub iss: String,
    pub aud: String,
    pub jti: String,
}

impl Claims {
    /// Claims for a token issued to `user` at `now`, living for the configured
    /// access lifetime.
    #[must_use]
    pub fn issue(user: UserId, config: &SecurityConfig, now: DateTime<Utc>) -> Self {
        let lifetime = i64::try_from(config.jwt_access_expiration_secs).unwrap_or(i64::MAX);
        let expires_at = Duration::try_seconds(lifetime)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            sub: user.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            nbf: Some(now.timestamp()),
            iss: config.jwt_issuer.clone(),
            aud: config.jwt_audience.clone(),
            jti: Uuid::now_v7().to_string(),
        }
    }

    /// The user the token was issued to.
    pub fn subject(&self) -> VaultResult<UserId> {
        UserId::parse(&self.sub)
            .map_err(|_| VaultError::InvalidToken("Subject is not a user id".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_issue_sets_lifetime_and_subject() {
        let user = UserId::new();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let config = SecurityConfig::default();

        let claims = Claims::issue(user, &config, now);

        assert_eq!(claims.subject().unwrap(), user);
        assert_eq!(claims.exp - claims.iat, 3600);
        assert_eq!(claims.iss, config.jwt_issuer);
        assert_eq!(claims.aud, config.jwt_audience);
    }

    #[test]
    fn test_non_uuid_subject_rejected() {
        let mut claims = Claims::issue(UserId::new(), &SecurityConfig::default(), Utc::now());
        claims.sub = "alice".to_string();

        assert!(matches!(claims.subject(), Err(VaultError::InvalidToken(_))));
    }
}
