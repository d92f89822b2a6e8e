/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /signup.
 *
 * # Registration Process
 *
 * 1. Require username, email, and password to be present and non-empty
 * 2. Check whether the email is already registered
 * 3. Hash the password with bcrypt
 * 4. Create the user
 * 5. Return the new user's id, username, and email (never the hash)
 *
 * # Concurrency
 *
 * The existence check and the insert are two store operations. The UNIQUE
 * constraint on `users.email` is the actual uniqueness guarantee: a
 * concurrent duplicate that slips past the check fails the insert and maps
 * to the same duplicate-email error as a sequential one.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::auth::handlers::types::{non_empty, SignupRequest, SignupResponse, UserSummary};
use crate::auth::users::{create_user, get_user_by_email};
use crate::error::{ApiError, ApiJson};

/// Sign up handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `ApiJson(request)` - Signup request containing username, email, password
///
/// # Returns
///
/// `201 Created` with the new user's id/username/email.
///
/// # Errors
///
/// * `400` - missing or empty fields, or email already registered
/// * `500` - store or hashing failure (opaque message, cause logged)
pub async fn signup(
    State(pool): State<PgPool>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let (Some(username), Some(email), Some(password)) = (
        non_empty(&request.username),
        non_empty(&request.email),
        non_empty(&request.password),
    ) else {
        return Err(ApiError::invalid_argument("All fields required"));
    };

    tracing::info!("Signup request for username: {username}, email: {email}");

    // Friendly pre-check; the schema's UNIQUE constraint is the real guard
    if get_user_by_email(&pool, email).await?.is_some() {
        tracing::warn!("Email already registered: {email}");
        return Err(ApiError::conflict("Email already registered"));
    }

    let password_hash = hash(password, DEFAULT_COST)?;

    let user = create_user(
        &pool,
        username.to_string(),
        email.to_string(),
        password_hash,
    )
    .await?;

    tracing::info!("User created successfully: {} ({})", user.username, user.email);

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            user: UserSummary {
                id: user.id,
                username: user.username,
                email: user.email,
            },
        }),
    ))
}
