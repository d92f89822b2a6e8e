/**
 * Router Configuration
 *
 * This module provides the main router creation function that assembles
 * all routes into a single Axum router.
 *
 * # Route Order
 *
 * 1. Public routes (welcome, signup, signin)
 * 2. Protected routes, wrapped in the auth gate via `route_layer`
 * 3. Fallback handler for unknown paths
 *
 * Request/response logging is handled by tower-http's `TraceLayer` across
 * the whole router, and CORS is open to any origin (the API serves browser
 * clients from arbitrary origins; bearer tokens, not cookies, carry the
 * session, so there is no CSRF surface to protect).
 */

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::handlers::{dashboard, signin, signup};
use crate::events::handlers::{create_event, list_events};
use crate::middleware::auth::require_auth;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `state` - Application state containing the pool and configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(state: AppState) -> Router<()> {
    // Routes that require the auth gate
    let protected = Router::new()
        .route("/dashboard", get(dashboard))
        .route("/events", post(create_event).get(list_events))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    Router::new()
        .route("/", get(root_handler))
        .route("/signup", post(signup))
        .route("/signin", post(signin))
        .merge(protected)
        .fallback(not_found_handler)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn root_handler() -> &'static str {
    "Welcome!"
}

async fn not_found_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
