//! Error types for account and session validation.

use thiserror::Error;

/// Errors returned while constructing account and session values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthDomainError {
    /// The email is empty after trimming.
    #[error("email must not be empty")]
    EmptyEmail,

    /// The email has no `@` or contains whitespace.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The email exceeds the 100-character storage limit.
    #[error("email exceeds 100 character limit: {0}")]
    EmailTooLong(String),

    /// The display name is empty after trimming.
    #[error("name must not be empty")]
    EmptyDisplayName,

    /// The display name exceeds the 100-character storage limit.
    #[error("name exceeds 100 character limit: {0}")]
    DisplayNameTooLong(String),

    /// The password is empty.
    #[error("password must not be empty")]
    EmptyPassword,

    /// The session signing secret is empty.
    #[error("session signing secret must not be empty")]
    EmptySigningKey,
}
