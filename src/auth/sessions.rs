/**
 * Session Tokens
 *
 * This module handles JWT issuance and verification for user sessions.
 * A session is a stateless signed claim held by the client; there is no
 * server-side session table. Verification is a pure function of
 * (token, secret, current time) and performs no store access.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Token validity window: one day.
pub const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// JWT claims structure
///
/// Carries exactly the session claim: the user identifier plus the
/// issued-at and expiry timestamps.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Issue a signed token for a user
///
/// # Arguments
/// * `user_id` - User ID to embed in the claim
/// * `secret` - Process-wide signing secret from the startup configuration
///
/// # Returns
/// JWT token string valid for [`TOKEN_TTL_SECS`]
pub fn issue_token(user_id: Uuid, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();

    let claims = Claims {
        sub: user_id.to_string(),
        iat: now,
        exp: now + TOKEN_TTL_SECS,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

/// Verify and decode a token
///
/// Checks the signature and the expiry. Malformed tokens, bad signatures,
/// and elapsed expiries all come back as errors.
///
/// # Arguments
/// * `token` - JWT token string as presented by the client
/// * `secret` - Process-wide signing secret
///
/// # Returns
/// Decoded claims or error
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_issue_and_verify_round_trip() {
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, SECRET).unwrap();

        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_validity_window_is_one_day() {
        let token = issue_token(Uuid::new_v4(), SECRET).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = issue_token(Uuid::new_v4(), SECRET).unwrap();
        assert!(verify_token(&token, "some-other-secret").is_err());
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        assert!(verify_token("not.a.token", SECRET).is_err());
        assert!(verify_token("", SECRET).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Expired well past the default validation leeway
        let now = unix_now();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            iat: now - 2 * TOKEN_TTL_SECS,
            exp: now - TOKEN_TTL_SECS,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_ref()),
        )
        .unwrap();

        assert!(verify_token(&token, SECRET).is_err());
    }
}
