//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PROSPER_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! ## Optional
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Listen port (default: 3001)
//! - `CORS_ORIGIN` - Origin allowed to call the API with credentials (default: <http://localhost:3000>)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag (e.g. production, staging)

use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;
use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "3001";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Browser origin allowed by CORS
    pub cors_origin: HeaderValue,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the database URL is missing or any variable
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`ApiConfig::from_env`].
    pub fn from_lookup(env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = database_url(&env)?;
        let host = get_env_or_default(&env, "HOST", DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default(&env, "PORT", DEFAULT_PORT)
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?;
        let cors_origin = HeaderValue::from_str(&get_env_or_default(
            &env,
            "CORS_ORIGIN",
            DEFAULT_CORS_ORIGIN,
        ))
        .map_err(|e| ConfigError::InvalidEnvVar("CORS_ORIGIN".to_string(), e.to_string()))?;

        Ok(Self {
            database_url,
            host,
            port,
            cors_origin,
            sentry_dsn: get_optional_env(&env, "SENTRY_DSN"),
            sentry_environment: get_optional_env(&env, "SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Load only the database URL from the environment, for tools that never
/// bind a server.
///
/// Calls `dotenvy::dotenv()` like [`ApiConfig::from_env`].
///
/// # Errors
///
/// Returns `ConfigError::MissingEnvVar` if neither variable is set.
pub fn database_url_from_env() -> Result<SecretString, ConfigError> {
    let _ = dotenvy::dotenv();

    database_url(|key| std::env::var(key).ok())
}

/// Get database URL from `PROSPER_DATABASE_URL` with fallback to generic
/// `DATABASE_URL`.
///
/// # Errors
///
/// Returns `ConfigError::MissingEnvVar` if neither variable is set.
pub fn database_url(env: impl Fn(&str) -> Option<String>) -> Result<SecretString, ConfigError> {
    env("PROSPER_DATABASE_URL")
        .or_else(|| env("DATABASE_URL"))
        .map(SecretString::from)
        .ok_or_else(|| ConfigError::MissingEnvVar("PROSPER_DATABASE_URL".to_string()))
}

/// Get an optional environment variable. Empty values count as unset.
fn get_optional_env(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    env(key).filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(env: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    env(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("PROSPER_DATABASE_URL", "postgres://localhost/prosper")]).unwrap();

        assert_eq!(config.database_url.expose_secret(), "postgres://localhost/prosper");
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3001");
        assert_eq!(config.cors_origin, "http://localhost:3000");
        assert!(config.sentry_dsn.is_none());
        assert!(config.sentry_environment.is_none());
    }

    #[test]
    fn test_database_url_fallback() {
        let config = load(&[("DATABASE_URL", "postgres://fallback/db")]).unwrap();
        assert_eq!(config.database_url.expose_secret(), "postgres://fallback/db");

        let config = load(&[
            ("PROSPER_DATABASE_URL", "postgres://primary/db"),
            ("DATABASE_URL", "postgres://fallback/db"),
        ])
        .unwrap();
        assert_eq!(config.database_url.expose_secret(), "postgres://primary/db");
    }

    #[test]
    fn test_database_url_without_server_settings() {
        // An unparseable PORT does not matter when only the URL is wanted
        let vars: HashMap<&str, &str> =
            HashMap::from([("DATABASE_URL", "postgres://fallback/db"), ("PORT", "nope")]);
        let url = database_url(|key| vars.get(key).map(|v| (*v).to_string())).unwrap();
        assert_eq!(url.expose_secret(), "postgres://fallback/db");

        let err = database_url(|_| None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref key) if key == "PROSPER_DATABASE_URL"));
    }

    #[test]
    fn test_missing_database_url() {
        let err = load(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref key) if key == "PROSPER_DATABASE_URL"));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/prosper"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("CORS_ORIGIN", "https://app.prosper.health"),
            ("SENTRY_DSN", "https://key@sentry.io/1"),
            ("SENTRY_ENVIRONMENT", ""),
        ])
        .unwrap();

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 8080);
        assert_eq!(config.cors_origin, "https://app.prosper.health");
        assert_eq!(config.sentry_dsn.as_deref(), Some("https://key@sentry.io/1"));
        assert!(config.sentry_environment.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("DATABASE_URL", "postgres://x/y"), ("PORT", "99999")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "PORT"));
    }

    #[test]
    fn test_invalid_host() {
        let err = load(&[("DATABASE_URL", "postgres://x/y"), ("HOST", "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "HOST"));
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let config = load(&[("DATABASE_URL", "postgres://user:hunter2@db/prosper")]).unwrap();
        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("hunter2"));
    }
}
