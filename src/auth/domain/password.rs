//! Plaintext and hashed password values.

use super::AuthDomainError;
use secrecy::{ExposeSecret, SecretString};

/// A plaintext password held only for the duration of a request.
#[derive(Debug)]
pub struct Password(SecretString);

impl Password {
    /// Wraps a submitted password. Whitespace is significant and kept.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::EmptyPassword`] when the value is empty.
    pub fn new(value: SecretString) -> Result<Self, AuthDomainError> {
        if value.expose_secret().is_empty() {
            return Err(AuthDomainError::EmptyPassword);
        }
        Ok(Self(value))
    }

    /// Returns the plaintext for hashing or verification.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// A PHC-format password hash string (`$argon2id$v=19$...`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wraps a PHC string produced by a hasher or read from storage.
    #[must_use]
    pub fn from_phc(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the PHC string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
