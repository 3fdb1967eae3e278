//! Bearer token resolution.

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};
use snipvault_security::TokenProvider;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub token_provider: Arc<TokenProvider>,
}

impl AuthMiddlewareState {
    pub fn new(token_provider: Arc<TokenProvider>) -> Self {
        Self { token_provider }
    }
}

/// Resolves a valid bearer token to a [`UserId`](snipvault_core::UserId) in the
/// request extensions.
///
/// Never rejects; handlers that need a user take
/// [`AuthenticatedUser`](crate::extractors::AuthenticatedUser), which answers 401
/// when no user was resolved.
pub async fn auth_middleware(
    State(state): State<AuthMiddlewareState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    if let Some(token) = token {
        match state.token_provider.authenticate(token) {
            Ok(user_id) => {
                request.extensions_mut().insert(user_id);
            }
            Err(e) => debug!("Ignoring bearer token: {}", e),
        }
    }

    next.run(request).await
}
