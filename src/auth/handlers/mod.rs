//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the authentication endpoints.
//! Handlers are organized into focused submodules.
//!
//! # Handlers
//!
//! - **`signup`** - `POST /signup` - User registration
//! - **`signin`** - `POST /signin` - User authentication
//! - **`dashboard`** - `GET /dashboard` - Authenticated welcome (gate demo)
//!
//! # Validation Policy
//!
//! Request string fields are deserialized as `Option<String>` and must be
//! present and non-empty after trimming; a missing field and an empty field
//! fail identically with 400. One policy, applied uniformly across signup,
//! signin, and event creation.

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

/// Dashboard handler
pub mod dashboard;

// Re-export handlers
pub use dashboard::dashboard;
pub use signin::signin;
pub use signup::signup;
