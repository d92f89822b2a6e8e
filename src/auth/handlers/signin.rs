/**
 * Signin Handler
 *
 * This module implements the user authentication handler for POST /signin.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password with bcrypt (constant-time comparison)
 * 3. Issue a signed token with a one-day validity window
 *
 * # Error Distinction
 *
 * An unknown email answers 400 "User not found"; a wrong password answers
 * 401 "Invalid credentials". Distinguishing the two leaks which emails are
 * registered - a trade-off this service's contract accepts deliberately,
 * so the two must stay distinguishable.
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;
use sqlx::PgPool;
use std::sync::Arc;

use crate::auth::handlers::types::{non_empty, SigninRequest, SigninResponse};
use crate::auth::sessions::issue_token;
use crate::auth::users::get_user_by_email;
use crate::error::{ApiError, ApiJson};
use crate::server::config::AppConfig;

/// Sign in handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `State(config)` - Startup configuration (signing secret)
/// * `ApiJson(request)` - Signin request containing email and password
///
/// # Returns
///
/// `200 OK` with a success message and a one-day JWT.
///
/// # Errors
///
/// * `400` - missing or empty fields, or no account with this email
/// * `401` - wrong password
/// * `500` - store, hashing, or token-issuance failure
pub async fn signin(
    State(pool): State<PgPool>,
    State(config): State<Arc<AppConfig>>,
    ApiJson(request): ApiJson<SigninRequest>,
) -> Result<Json<SigninResponse>, ApiError> {
    let (Some(email), Some(password)) = (non_empty(&request.email), non_empty(&request.password))
    else {
        return Err(ApiError::invalid_argument("All fields required"));
    };

    tracing::info!("Signin request for: {email}");

    let user = get_user_by_email(&pool, email).await?.ok_or_else(|| {
        tracing::warn!("User not found: {email}");
        ApiError::not_found("User not found")
    })?;

    let valid = verify(password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Invalid password for user: {email}");
        return Err(ApiError::unauthenticated("Invalid credentials"));
    }

    let token = issue_token(user.id, &config.jwt_secret)
        .map_err(|e| ApiError::internal(format!("token issuance failed: {e}")))?;

    tracing::info!("User signed in successfully: {} ({})", user.username, user.email);

    Ok(Json(SigninResponse {
        message: "Login successful".to_string(),
        token,
    }))
}
