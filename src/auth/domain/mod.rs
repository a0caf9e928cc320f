//! Domain model for accounts, credentials and sessions.

mod account;
mod error;
mod ids;
mod password;
mod session;

pub use account::{Account, DisplayName, EmailAddress, NewAccount};
pub use error::AuthDomainError;
pub use ids::{AccountId, SessionId};
pub use password::{Password, PasswordHash};
pub use session::{Session, SessionSigner, SessionToken};

/// Maximum length for emails and display names, matching the `VARCHAR(100)`
/// columns.
pub const MAX_ACCOUNT_FIELD_LENGTH: usize = 100;
