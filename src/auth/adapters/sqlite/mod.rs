//! SQLite adapter for account persistence.

mod models;
mod repository;

pub use repository::SqliteAccountRepository;
