//! Route Configuration Module
//!
//! This module configures all HTTP routes for the server.
//!
//! # Routes
//!
//! ## Public
//!
//! - `GET /` - plain-text welcome
//! - `POST /signup` - user registration
//! - `POST /signin` - user authentication
//!
//! ## Protected (behind the auth gate)
//!
//! - `GET /dashboard` - authenticated welcome
//! - `POST /events` - create an event
//! - `GET /events` - list the caller's events
//!
//! Anything else falls through to a 404 handler.

/// Main router creation
pub mod router;

// Re-export commonly used functions
pub use router::create_router;
