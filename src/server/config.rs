/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration from
 * the environment. Configuration is materialized into an explicit struct
 * exactly once at process start and carried through application state;
 * nothing else in the crate reads environment variables.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `JWT_SECRET`   - shared secret for signing session tokens (required)
 * - `SERVER_PORT`  - listen port (optional, defaults to 3000)
 *
 * # Error Handling
 *
 * Missing or invalid values are fatal startup errors. There is deliberately
 * no fallback signing secret.
 */

use thiserror::Error;

/// Default listen port when `SERVER_PORT` is not set.
const DEFAULT_PORT: u16 = 3000;

/// Errors raised while loading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// An environment variable is set but cannot be parsed
    #[error("invalid value {value:?} for {name}")]
    Invalid {
        /// Variable name
        name: &'static str,
        /// The offending value
        value: String,
    },
}

/// Startup configuration for the server
///
/// Constructed once in `main` via [`AppConfig::from_env`] and shared through
/// [`crate::server::state::AppState`]. The JWT secret is process-wide and is
/// never rotated at runtime.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Shared secret for signing and verifying session tokens
    pub jwt_secret: String,
    /// Port the server listens on
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `DATABASE_URL` or `JWT_SECRET` is missing,
    /// or if `SERVER_PORT` is set to something that is not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => match raw.parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    return Err(ConfigError::Invalid {
                        name: "SERVER_PORT",
                        value: raw,
                    })
                }
            },
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variable_message_names_the_variable() {
        let err = ConfigError::Missing("JWT_SECRET");
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn test_invalid_variable_message_includes_value() {
        let err = ConfigError::Invalid {
            name: "SERVER_PORT",
            value: "not-a-port".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("SERVER_PORT"));
        assert!(message.contains("not-a-port"));
    }
}
