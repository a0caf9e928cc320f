//! Password hashing port.

use thiserror::Error;

use crate::auth::domain::{Password, PasswordHash};

/// A hashing backend failure. Never carries the password.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("password hashing failed: {0}")]
pub struct PasswordHashError(String);

impl PasswordHashError {
    /// Creates an error with a backend message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// One-way password hashing with salted verification.
///
/// Implementations are CPU-bound and are invoked from blocking threads.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a password with a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordHashError`] when the backend fails.
    fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHashError>;

    /// Checks a password against a stored hash.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordHashError`] when the stored hash cannot be parsed.
    /// A mismatch is `Ok(false)`.
    fn verify(&self, password: &Password, hash: &PasswordHash) -> Result<bool, PasswordHashError>;
}
