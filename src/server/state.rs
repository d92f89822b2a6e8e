/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container for the application. It holds
 * the PostgreSQL connection pool and the startup configuration. Handlers
 * share no other process state: every request is handled independently and
 * all durable state lives in the store.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers to extract just the pool or
 * just the configuration without taking the whole `AppState`, following
 * Axum's recommended pattern for state management.
 */

use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

use crate::server::config::AppConfig;

/// Application state shared across all request handlers
///
/// # Fields
///
/// * `pool` - PostgreSQL connection pool; the store is required, not
///   optional, and startup fails without it
/// * `config` - Startup configuration (JWT secret, bind settings)
///
/// # Thread Safety
///
/// Both fields are cheap to clone and safe to share: `PgPool` is internally
/// reference-counted and the configuration is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: PgPool,
    /// Startup configuration, loaded once in `main`
    pub config: Arc<AppConfig>,
}

/// Allow handlers to extract the pool directly with `State(pool): State<PgPool>`
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

/// Allow handlers to extract the configuration directly with
/// `State(config): State<Arc<AppConfig>>`
impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
