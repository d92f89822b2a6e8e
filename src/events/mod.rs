//! Events Module
//!
//! This module handles personal calendar-style events: the data model,
//! store queries, and the create/list handlers. Every event is owned by
//! the user who created it; listing is always filtered by owner, so one
//! user can never see another user's events.
//!
//! # Module Structure
//!
//! - **`db`** - Event model and database operations
//! - **`handlers`** - HTTP handlers for `POST /events` and `GET /events`

/// Event model and database operations
pub mod db;

/// HTTP handlers for event endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use db::Event;
pub use handlers::{create_event, list_events};
