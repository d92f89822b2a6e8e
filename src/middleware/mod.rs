//! Middleware Module
//!
//! This module contains the HTTP middleware for the server. Today that is
//! the bearer-token authentication gate protecting `/dashboard` and
//! `/events`.

pub mod auth;

pub use auth::{require_auth, AuthenticatedUser, CurrentUser};
