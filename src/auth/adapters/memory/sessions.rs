//! Process-local session store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::auth::{
    domain::{AccountId, SessionId},
    ports::{SessionStore, SessionStoreError, SessionStoreResult},
};

/// Thread-safe in-memory session store.
///
/// Sessions live until logout or process exit.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, AccountId>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> SessionStoreError {
    SessionStoreError::storage(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, id: SessionId, account_id: AccountId) -> SessionStoreResult<()> {
        self.sessions
            .write()
            .map_err(lock_error)?
            .insert(id, account_id);
        Ok(())
    }

    async fn find(&self, id: SessionId) -> SessionStoreResult<Option<AccountId>> {
        Ok(self.sessions.read().map_err(lock_error)?.get(&id).copied())
    }

    async fn remove(&self, id: SessionId) -> SessionStoreResult<bool> {
        Ok(self
            .sessions
            .write()
            .map_err(lock_error)?
            .remove(&id)
            .is_some())
    }
}
