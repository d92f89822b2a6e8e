/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers, plus the field-presence helper that implements
 * the crate-wide validation policy.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Require a request field to be present and non-empty
///
/// Returns the trimmed value, or `None` when the field is missing, empty,
/// or whitespace. Missing and empty fields are deliberately
/// indistinguishable to callers.
pub fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Sign up request
///
/// Fields are optional at the serde layer so that absence and emptiness can
/// be rejected with the same 400 response instead of a deserialization
/// error.
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's chosen username
    pub username: Option<String>,
    /// User's email address
    pub email: Option<String>,
    /// User's password (hashed before storage)
    pub password: Option<String>,
}

/// Sign in request
#[derive(Deserialize, Serialize, Debug)]
pub struct SigninRequest {
    /// User's email address
    pub email: Option<String>,
    /// User's password (verified against the stored hash)
    pub password: Option<String>,
}

/// User summary returned by signup (no sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserSummary {
    /// User's unique ID
    pub id: Uuid,
    /// User's username
    pub username: String,
    /// User's email address
    pub email: String,
}

/// Signup response
#[derive(Serialize, Debug)]
pub struct SignupResponse {
    /// The newly created user
    pub user: UserSummary,
}

/// Signin response
#[derive(Serialize, Debug)]
pub struct SigninResponse {
    /// Human-readable success message
    pub message: String,
    /// JWT token for authentication (one-day expiration)
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_non_empty_accepts_value() {
        assert_eq!(non_empty(&Some("al".to_string())), Some("al"));
    }

    #[test]
    fn test_non_empty_trims() {
        assert_eq!(non_empty(&Some("  al  ".to_string())), Some("al"));
    }

    #[test]
    fn test_non_empty_rejects_missing_empty_and_whitespace() {
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&Some("   ".to_string())), None);
    }

    #[test]
    fn test_signup_request_tolerates_missing_fields() {
        let request: SignupRequest = serde_json::from_str(r#"{"username":"al"}"#).unwrap();
        assert_eq!(request.username, Some("al".to_string()));
        assert_eq!(request.email, None);
        assert_eq!(request.password, None);
    }

    #[test]
    fn test_signin_request_tolerates_empty_body() {
        let request: SigninRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.email, None);
        assert_eq!(request.password, None);
    }
}
