//! API Error Module
//!
//! This module defines the single error type used by every HTTP handler and
//! its conversion to HTTP responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error taxonomy and constructors
//! - **`conversion`** - `IntoResponse` and `From` implementations
//! - **`extract`** - `ApiJson`, the body extractor that keeps rejections
//!   on the same contract
//!
//! # Error Taxonomy
//!
//! - `InvalidArgument` - missing or empty required fields
//! - `Conflict` - duplicate email at signup
//! - `NotFound` - unknown email at signin
//! - `Unauthenticated` - bad password, missing/invalid/expired token
//! - `Internal` - unexpected store or primitive failure
//!
//! # Response Contract
//!
//! Every error is answered with the same JSON shape:
//!
//! ```json
//! { "error": "message", "status": 400 }
//! ```
//!
//! Internal failures keep their underlying cause out of the response body:
//! the cause is logged and the caller sees an opaque message.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

/// Contract-preserving request body extraction
pub mod extract;

// Re-export commonly used types
pub use extract::ApiJson;
pub use types::ApiError;
