/**
 * Authentication Gate
 *
 * This module provides the middleware protecting routes that require an
 * authenticated caller. It extracts the bearer token from the
 * Authorization header, verifies it, and attaches the resulting identity
 * to the request for handlers to pick up.
 *
 * The gate holds no state and performs no database access: it is a pure
 * function of (token, shared signing secret, current time). A request with
 * a valid unexpired token passes even if the account was since removed,
 * because sessions are stateless claims.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::sessions::verify_token;
use crate::error::ApiError;
use crate::server::config::AppConfig;

/// Identity attached to the request by the auth gate
#[derive(Clone, Debug, Serialize)]
pub struct AuthenticatedUser {
    /// The user id decoded from the token's claim
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies the token signature and expiry against the shared secret
/// 3. Parses the user id from the claims
/// 4. Attaches [`AuthenticatedUser`] to request extensions for handlers
///
/// Returns 401 if the token is missing, malformed, expired, or carries a
/// claim that does not decode to a user id.
pub async fn require_auth(
    State(config): State<Arc<AppConfig>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::unauthenticated("No token provided")
        })?;

    // Format: "Bearer <token>"
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::unauthenticated("No token provided")
    })?;

    let claims = verify_token(token, &config.jwt_secret).map_err(|e| {
        tracing::warn!("Invalid token: {e}");
        ApiError::unauthenticated("Invalid or expired token")
    })?;

    // A signed claim that does not hold a user id is as good as no token
    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Invalid user ID in token claims: {e}");
        ApiError::unauthenticated("Invalid or expired token")
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated caller
///
/// Handlers behind the gate take `CurrentUser(user)` as a parameter to
/// receive the identity attached by [`require_auth`]. Using it on a route
/// outside the gate rejects with 401.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::unauthenticated("No token provided")
            })
    }
}
