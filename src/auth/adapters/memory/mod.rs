//! In-memory adapters for accounts and sessions.

mod accounts;
mod sessions;

pub use accounts::InMemoryAccountRepository;
pub use sessions::InMemorySessionStore;
