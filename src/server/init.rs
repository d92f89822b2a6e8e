/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: connecting the database pool, running migrations, building the
 * shared state, and assembling the router.
 *
 * # Initialization Process
 *
 * 1. Connect the PostgreSQL pool from the configured URL
 * 2. Run pending sqlx migrations
 * 3. Build `AppState` from the pool and configuration
 * 4. Create the router with all routes and middleware
 *
 * Unlike a service that can degrade without its database, this system is
 * request-handler glue over the store, so connection or migration failure
 * aborts startup.
 */

use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;
use thiserror::Error;

use crate::routes::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Errors raised while assembling the application
#[derive(Debug, Error)]
pub enum InitError {
    /// Could not connect to the database
    #[error("database connection failed: {0}")]
    Connect(#[from] sqlx::Error),

    /// Could not apply database migrations
    #[error("database migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Startup configuration produced by [`AppConfig::from_env`]
///
/// # Returns
///
/// Configured Axum `Router` ready to serve requests.
///
/// # Errors
///
/// Returns [`InitError`] if the database is unreachable or migrations fail.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, InitError> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    Ok(create_router(state))
}
