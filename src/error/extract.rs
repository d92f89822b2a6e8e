/**
 * Json Extraction with the API Error Contract
 *
 * Axum's stock `Json` extractor answers malformed bodies and missing
 * content types with plain-text rejections. Every other failure in this
 * service uses the `{"error","status"}` JSON contract, so request bodies
 * must too: `ApiJson` wraps the stock extractor and maps its rejection
 * onto `ApiError::InvalidArgument`.
 */

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

use crate::error::types::ApiError;

/// `Json` extractor whose rejection follows the API error contract
///
/// Drop-in replacement for `Json<T>` in handler signatures. The inner
/// value is the deserialized body.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                Err(ApiError::invalid_argument(rejection.body_text()))
            }
        }
    }
}
