//! Authentication Module
//!
//! This module handles user accounts, registration, sign-in, and session
//! tokens.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User data model and database operations
//! - **`sessions`** - JWT token issuance and verification
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Authentication Flow
//!
//! 1. **Signup**: `POST /signup` → duplicate-email check → bcrypt hash →
//!    user created → id/username/email returned (never the hash)
//! 2. **Signin**: `POST /signin` → credentials verified → one-day JWT
//!    returned
//! 3. **Dashboard**: `GET /dashboard` → token verified by the auth gate →
//!    identity echoed back
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Password verification is constant-time (via bcrypt)
//! - Tokens are stateless signed claims; no server-side session table
//! - Tokens expire after one day

/// User data model and database operations
pub mod users;

/// JWT token issuance and verification
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{SigninRequest, SigninResponse, SignupRequest, SignupResponse};
pub use handlers::{dashboard, signin, signup};
pub use sessions::{issue_token, verify_token, Claims};
