//! Eventbook - Main Library
//!
//! Eventbook is a minimal authenticated event-tracking backend. Users
//! register, sign in, and manage personal calendar-style events (title,
//! date, time) scoped to their account.
//!
//! # Overview
//!
//! This library provides the full HTTP surface of the service:
//!
//! - User registration and sign-in with bcrypt password hashing
//! - Stateless JWT bearer-token sessions with a one-day expiry
//! - Per-user event creation and listing backed by PostgreSQL
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`server`** - Configuration loading, application state, app assembly
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - User accounts, JWT sessions, signup/signin/dashboard handlers
//! - **`events`** - Event model, queries, and create/list handlers
//! - **`middleware`** - Bearer-token authentication gate
//! - **`error`** - Unified API error taxonomy
//!
//! # Request Flow
//!
//! ```text
//! client → router → (auth gate, if protected) → handler → store / crypto → response
//! ```
//!
//! No component retains in-memory state between requests; all durable state
//! lives in the PostgreSQL store. Shared process state is limited to the
//! connection pool and the startup configuration, both carried by
//! [`server::state::AppState`].
//!
//! # Error Handling
//!
//! Every failure surfaces through [`error::ApiError`], which maps the error
//! taxonomy (invalid argument, conflict, not found, unauthenticated,
//! internal) onto a single JSON response contract. Internal failures are
//! logged with their underlying cause and answered with an opaque message.
//!
//! # Usage
//!
//! ```rust,no_run
//! use eventbook::server::config::AppConfig;
//! use eventbook::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```

/// Server setup, configuration, and application state
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication, user accounts, and session tokens
pub mod auth;

/// Event model and handlers
pub mod events;

/// Request-processing middleware
pub mod middleware;

/// API error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use routes::create_router;
pub use server::state::AppState;
