/**
 * Event Model and Database Operations
 *
 * Events are created by authenticated calls and never mutated or deleted
 * by this system. `date` and `time` are opaque strings; the service does
 * not parse or validate their format.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Event struct representing an event in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    /// Unique event ID
    pub id: Uuid,
    /// Event title
    pub title: String,
    /// Event date (opaque string, e.g. "2026-08-30")
    pub date: String,
    /// Event time (opaque string, e.g. "09:00")
    pub time: String,
    /// The user that owns this event
    pub owner_id: Uuid,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new event owned by `owner_id`
pub async fn create_event(
    pool: &PgPool,
    title: String,
    date: String,
    time: String,
    owner_id: Uuid,
) -> Result<Event, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let event = sqlx::query_as::<_, Event>(
        r#"
        INSERT INTO events (id, title, date, time, owner_id, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, title, date, time, owner_id, created_at
        "#,
    )
    .bind(id)
    .bind(&title)
    .bind(&date)
    .bind(&time)
    .bind(owner_id)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(event)
}

/// List all events owned by `owner_id`, oldest first
pub async fn list_events_for_owner(
    pool: &PgPool,
    owner_id: Uuid,
) -> Result<Vec<Event>, sqlx::Error> {
    let events = sqlx::query_as::<_, Event>(
        r#"
        SELECT id, title, date, time, owner_id, created_at
        FROM events
        WHERE owner_id = $1
        ORDER BY created_at
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(events)
}
