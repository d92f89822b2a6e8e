/**
 * Event Handlers
 *
 * HTTP handlers for POST /events and GET /events. Both routes sit behind
 * the auth gate; the owner of every created event and the filter of every
 * listing is always the authenticated caller, never client input.
 */

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{ApiError, ApiJson};
use crate::events::db::{self, Event};
use crate::middleware::auth::CurrentUser;

use crate::auth::handlers::types::non_empty;

/// Create event request
///
/// Fields are optional at the serde layer so absence and emptiness can be
/// rejected with the same 400 response (crate-wide validation policy).
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateEventRequest {
    /// Event title
    pub title: Option<String>,
    /// Event date (opaque string)
    pub date: Option<String>,
    /// Event time (opaque string)
    pub time: Option<String>,
}

/// Create event handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `user` - Identity attached by the auth gate
/// * `ApiJson(request)` - Event fields
///
/// # Returns
///
/// `200 OK` with the created event, store-assigned id included.
///
/// # Errors
///
/// * `400` - any of title/date/time missing or empty (nothing is written)
/// * `500` - store failure (opaque message, cause logged)
pub async fn create_event(
    State(pool): State<PgPool>,
    CurrentUser(user): CurrentUser,
    ApiJson(request): ApiJson<CreateEventRequest>,
) -> Result<Json<Event>, ApiError> {
    let (Some(title), Some(date), Some(time)) = (
        non_empty(&request.title),
        non_empty(&request.date),
        non_empty(&request.time),
    ) else {
        return Err(ApiError::invalid_argument("All fields required"));
    };

    tracing::info!("Creating event {title:?} for user {}", user.user_id);

    let event = db::create_event(
        &pool,
        title.to_string(),
        date.to_string(),
        time.to_string(),
        user.user_id,
    )
    .await?;

    Ok(Json(event))
}

/// List events handler
///
/// Returns every event owned by the authenticated caller and nothing else.
///
/// # Errors
///
/// * `500` - store failure
pub async fn list_events(
    State(pool): State<PgPool>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Event>>, ApiError> {
    let events = db::list_events_for_owner(&pool, user.user_id).await?;

    tracing::debug!("Listed {} events for user {}", events.len(), user.user_id);

    Ok(Json(events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_tolerates_missing_fields() {
        let request: CreateEventRequest =
            serde_json::from_str(r#"{"title":"standup"}"#).unwrap();
        assert_eq!(request.title, Some("standup".to_string()));
        assert_eq!(request.date, None);
        assert_eq!(request.time, None);
    }

    #[test]
    fn test_request_round_trip() {
        let request: CreateEventRequest = serde_json::from_str(
            r#"{"title":"standup","date":"2026-08-30","time":"09:00"}"#,
        )
        .unwrap();
        assert_eq!(non_empty(&request.title), Some("standup"));
        assert_eq!(non_empty(&request.date), Some("2026-08-30"));
        assert_eq!(non_empty(&request.time), Some("09:00"));
    }
}
