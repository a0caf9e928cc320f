//! Port contracts for account storage, session storage and password hashing.

mod accounts;
mod hasher;
mod sessions;

pub use accounts::{AccountRepository, AccountRepositoryError, AccountRepositoryResult};
pub use hasher::{PasswordHashError, PasswordHasher};
pub use sessions::{SessionStore, SessionStoreError, SessionStoreResult};
