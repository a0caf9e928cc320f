//! Account values.

use super::{AccountId, AuthDomainError, MAX_ACCOUNT_FIELD_LENGTH, PasswordHash};
use serde::Serialize;
use std::fmt;

/// Login email, trimmed and otherwise kept exactly as entered.
///
/// Lookups are case-sensitive: `Ada@example.com` and `ada@example.com` are
/// different accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::EmptyEmail`] when the value is blank,
    /// [`AuthDomainError::EmailTooLong`] above 100 characters, and
    /// [`AuthDomainError::InvalidEmail`] when it lacks an `@` between two
    /// non-empty parts or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, AuthDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(AuthDomainError::EmptyEmail);
        }

        if normalized.chars().count() > MAX_ACCOUNT_FIELD_LENGTH {
            return Err(AuthDomainError::EmailTooLong(raw));
        }

        let has_parts = normalized
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !has_parts || normalized.chars().any(char::is_whitespace) {
            return Err(AuthDomainError::InvalidEmail(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the email as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name shown to the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    /// Creates a validated display name.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::EmptyDisplayName`] when the value is blank
    /// or [`AuthDomainError::DisplayNameTooLong`] above 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, AuthDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(AuthDomainError::EmptyDisplayName);
        }

        if normalized.chars().count() > MAX_ACCOUNT_FIELD_LENGTH {
            return Err(AuthDomainError::DisplayNameTooLong(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Account fields ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    /// Login email.
    pub email: EmailAddress,
    /// Display name.
    pub display_name: DisplayName,
    /// Hashed password.
    pub password_hash: PasswordHash,
}

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    id: AccountId,
    email: EmailAddress,
    display_name: DisplayName,
    #[serde(skip)]
    password_hash: PasswordHash,
}

impl Account {
    /// Builds an account from its stored identifier and fields.
    #[must_use]
    pub fn new(id: AccountId, fields: NewAccount) -> Self {
        let NewAccount {
            email,
            display_name,
            password_hash,
        } = fields;
        Self {
            id,
            email,
            display_name,
            password_hash,
        }
    }

    /// Returns the account identifier.
    #[must_use]
    pub const fn id(&self) -> AccountId {
        self.id
    }

    /// Returns the login email.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the display name.
    #[must_use]
    pub const fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Returns the stored password hash.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}
