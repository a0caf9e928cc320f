//! In-memory account repository for tests.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::auth::{
    domain::{Account, AccountId, EmailAddress, NewAccount},
    ports::{AccountRepository, AccountRepositoryError, AccountRepositoryResult},
};

/// Thread-safe in-memory account repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepository {
    state: Arc<RwLock<InMemoryAccountState>>,
}

#[derive(Debug, Default)]
struct InMemoryAccountState {
    accounts: BTreeMap<AccountId, Account>,
    email_index: HashMap<EmailAddress, AccountId>,
    last_id: i32,
}

impl InMemoryAccountRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> AccountRepositoryError {
    AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn insert(&self, account: &NewAccount) -> AccountRepositoryResult<Account> {
        let mut state = self.state.write().map_err(lock_error)?;

        if state.email_index.contains_key(&account.email) {
            return Err(AccountRepositoryError::DuplicateEmail(
                account.email.clone(),
            ));
        }

        state.last_id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| lock_error("identifier space exhausted"))?;
        let id = AccountId::from_raw(state.last_id);
        let stored = Account::new(id, account.clone());
        state.email_index.insert(account.email.clone(), id);
        state.accounts.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> AccountRepositoryResult<Option<Account>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .email_index
            .get(email)
            .and_then(|id| state.accounts.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: AccountId) -> AccountRepositoryResult<Option<Account>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.accounts.get(&id).cloned())
    }
}
