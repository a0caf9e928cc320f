//! Environment-driven application configuration.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Variable holding the session signing secret.
pub const SECRET_KEY_VAR: &str = "GOTDONE_SECRET_KEY";
/// Variable holding the SQLite database path.
pub const DATABASE_URL_VAR: &str = "GOTDONE_DATABASE_URL";
/// Variable holding the connection pool size.
pub const POOL_SIZE_VAR: &str = "GOTDONE_POOL_SIZE";

/// Database file used when none is configured.
pub const DEFAULT_DATABASE_URL: &str = "to-dos.db";
/// Pool size used when none is configured.
pub const DEFAULT_POOL_SIZE: u32 = 4;

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The signing secret is unset or blank.
    #[error("{variable} must be set to a non-empty value")]
    MissingSecret {
        /// Name of the environment variable.
        variable: &'static str,
    },

    /// The pool size is not a positive integer.
    #[error("GOTDONE_POOL_SIZE must be a positive integer, got '{value}'")]
    InvalidPoolSize {
        /// The rejected value.
        value: String,
    },
}

/// Settings needed to open the application.
#[derive(Debug)]
pub struct AppConfig {
    database_url: String,
    secret_key: SecretString,
    pool_size: u32,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSecret`] when the secret is absent or
    /// blank and [`ConfigError::InvalidPoolSize`] when the pool size does not
    /// parse as a positive integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret_key = lookup(SECRET_KEY_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(SecretString::from)
            .ok_or(ConfigError::MissingSecret {
                variable: SECRET_KEY_VAR,
            })?;

        let database_url = lookup(DATABASE_URL_VAR)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());

        let pool_size = match lookup(POOL_SIZE_VAR) {
            None => DEFAULT_POOL_SIZE,
            Some(value) => value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(ConfigError::InvalidPoolSize { value })?,
        };

        Ok(Self {
            database_url,
            secret_key,
            pool_size,
        })
    }

    /// Replaces the database location.
    #[must_use]
    pub fn with_database_url(mut self, database_url: impl Into<String>) -> Self {
        self.database_url = database_url.into();
        self
    }

    /// Returns the SQLite database path or URL.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Returns the session signing secret.
    #[must_use]
    pub const fn secret_key(&self) -> &SecretString {
        &self.secret_key
    }

    /// Returns the maximum number of pooled connections.
    #[must_use]
    pub const fn pool_size(&self) -> u32 {
        self.pool_size
    }
}

impl Clone for AppConfig {
    fn clone(&self) -> Self {
        Self {
            database_url: self.database_url.clone(),
            secret_key: SecretString::from(self.secret_key.expose_secret()),
            pool_size: self.pool_size,
        }
    }
}
