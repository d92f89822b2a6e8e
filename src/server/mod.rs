//! Server Module
//!
//! This module contains all code for configuring and assembling the Axum
//! HTTP server. It provides the foundation for the application's backend
//! infrastructure.
//!
//! # Architecture
//!
//! The server module is organized into focused submodules:
//!
//! - **`config`** - Startup configuration loaded from the environment
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`init`** - App assembly: pool connection, migrations, router
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig::from_env()` reads the database
//!    URL, JWT secret, and port once at startup
//! 2. **Store Connection**: the PostgreSQL pool is connected and migrations
//!    are applied; failure here is fatal, the store is not optional
//! 3. **Router Creation**: all routes and middleware are configured

/// Startup configuration
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
