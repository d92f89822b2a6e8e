/**
 * Error Conversion
 *
 * This module provides conversion implementations for API errors: the
 * `IntoResponse` impl that turns an `ApiError` into an HTTP response, and
 * `From` impls for the store and hashing primitives so handlers can use
 * the `?` operator.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert an API error into an HTTP response
    ///
    /// Internal errors log their underlying cause here; the response body
    /// carries only the opaque message.
    fn into_response(self) -> Response {
        if let ApiError::Internal { detail } = &self {
            tracing::error!("internal error: {detail}");
        }

        let status = self.status_code();
        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    /// Map store failures onto the API taxonomy
    ///
    /// A unique-constraint violation can only come from the email column on
    /// `users` (the one unique index in the schema), so it maps to the
    /// duplicate-email conflict. That is what closes the signup
    /// check-then-create race: the concurrent loser gets the same error as
    /// a sequential duplicate, not a 500.
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                ApiError::conflict("Email already registered")
            }
            _ => ApiError::internal(err.to_string()),
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ApiError::internal(format!("bcrypt failure: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_response_status_matches_error() {
        let response = ApiError::unauthenticated("No token provided").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = ApiError::invalid_argument("All fields required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::internal("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_response_is_json() {
        let response = ApiError::conflict("Email already registered").into_response();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("application/json"));
    }

    #[test]
    fn test_sqlx_error_maps_to_internal() {
        let error: ApiError = sqlx::Error::RowNotFound.into();
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        // Raw sqlx text never reaches the caller
        assert_eq!(error.message(), "Internal server error");
    }
}
