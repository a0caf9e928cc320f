//! Repository port for registered accounts.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::auth::domain::{Account, AccountId, EmailAddress, NewAccount};

/// Result type for account repository operations.
pub type AccountRepositoryResult<T> = Result<T, AccountRepositoryError>;

/// Account persistence contract.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Stores a new account and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AccountRepositoryError::DuplicateEmail`] when the email is
    /// already registered.
    async fn insert(&self, account: &NewAccount) -> AccountRepositoryResult<Account>;

    /// Finds an account by exact email.
    async fn find_by_email(&self, email: &EmailAddress) -> AccountRepositoryResult<Option<Account>>;

    /// Finds an account by identifier.
    async fn find_by_id(&self, id: AccountId) -> AccountRepositoryResult<Option<Account>>;
}

/// Errors returned by account repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AccountRepositoryError {
    /// The email is already registered.
    #[error("an account with email {0} already exists")]
    DuplicateEmail(EmailAddress),

    /// A stored row could not be turned back into an account.
    #[error("invalid persisted account data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AccountRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Wraps a row-decoding error.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }
}
