//! Authenticated user extractor.

use crate::responses::ApiResponse;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use snipvault_core::{ErrorResponse, UserId, VaultError};
use tracing::warn;

/// The user a request was authenticated as.
///
/// Reads the id placed by [`auth_middleware`](crate::middleware::auth_middleware)
/// and rejects with 401 before the handler body runs.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

#[derive(Debug)]
pub struct AuthError(pub VaultError);

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(ApiResponse::<()>::error(ErrorResponse::from_error(&self.0)));
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<UserId>() {
            Some(&user_id) => Ok(Self { user_id }),
            None => {
                warn!("Rejected unauthenticated request to {}", parts.uri.path());
                Err(AuthError(VaultError::unauthorized("Unauthorized")))
            }
        }
    }
}
