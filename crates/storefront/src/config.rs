//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `LUVYN_HOST` - Bind address (default: 127.0.0.1)
//! - `LUVYN_PORT` - Listen port (default: 3000)
//! - `LUVYN_BASE_URL` - Public URL for the shop (default: http://localhost:3000)
//! - `LUVYN_SESSION_TTL_HOURS` - Session inactivity expiry (default: 24)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Default session inactivity expiry.
const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the shop
    pub base_url: String,
    /// Session inactivity expiry in hours
    pub session_ttl_hours: i64,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("LUVYN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("LUVYN_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("LUVYN_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("LUVYN_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("LUVYN_BASE_URL", "http://localhost:3000");
        let session_ttl_hours =
            get_env_or_default("LUVYN_SESSION_TTL_HOURS", "24")
                .parse::<i64>()
                .map_err(|e| {
                    ConfigError::InvalidEnvVar("LUVYN_SESSION_TTL_HOURS".to_string(), e.to_string())
                })?;

        Ok(Self {
            host,
            port,
            base_url,
            session_ttl_hours,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            session_ttl_hours: 24,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_default_session_ttl_is_one_day() {
        let config = StorefrontConfig::default();
        assert_eq!(config.session_ttl_hours, 24);
    }

    #[test]
    fn test_get_env_or_default_falls_back() {
        assert_eq!(
            get_env_or_default("LUVYN_TEST_UNSET_VARIABLE", "fallback"),
            "fallback"
        );
    }
}
