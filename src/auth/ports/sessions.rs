//! Server-side session storage port.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::auth::domain::{AccountId, SessionId};

/// Result type for session store operations.
pub type SessionStoreResult<T> = Result<T, SessionStoreError>;

/// Maps live session identifiers to the account they authenticate.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Records a new session.
    async fn insert(&self, id: SessionId, account_id: AccountId) -> SessionStoreResult<()>;

    /// Returns the account for a live session.
    async fn find(&self, id: SessionId) -> SessionStoreResult<Option<AccountId>>;

    /// Ends a session. Returns `false` when it was not live.
    async fn remove(&self, id: SessionId) -> SessionStoreResult<bool>;
}

/// Errors returned by session store implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    /// Storage failure.
    #[error("session storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionStoreError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
