//! Shared helpers for in-memory integration tests.

use std::sync::Arc;

use gotdone::auth::{
    adapters::{
        hasher::Argon2PasswordHasher,
        memory::{InMemoryAccountRepository, InMemorySessionStore},
    },
    domain::SessionSigner,
    services::{AuthService, RegisterRequest},
};
use gotdone::todo::{adapters::memory::InMemoryTodoRepository, services::TodoLifecycleService};
use mockable::DefaultClock;
use rstest::fixture;
use secrecy::SecretString;

/// Lifecycle service over the in-memory repository.
pub type MemoryTodos = TodoLifecycleService<InMemoryTodoRepository, DefaultClock>;

/// Authentication service over in-memory adapters.
pub type MemoryAuth =
    AuthService<InMemoryAccountRepository, InMemorySessionStore, Argon2PasswordHasher>;

/// Both services, wired the way the presentation layer sees them.
pub struct Harness {
    pub todos: MemoryTodos,
    pub auth: MemoryAuth,
}

impl Harness {
    /// Registers a user and returns their session token.
    ///
    /// # Errors
    ///
    /// Returns an error if registration fails.
    pub async fn signed_in(&self, email: &str) -> Result<String, eyre::Report> {
        let session = self
            .auth
            .register(RegisterRequest::new(email, "correct horse", "Tester"))
            .await?;
        Ok(session.token().as_str().to_owned())
    }
}

/// Provides fresh services for each test.
#[fixture]
pub fn harness() -> Harness {
    let signer =
        SessionSigner::new(&SecretString::from("in-memory-secret")).expect("non-empty secret");
    Harness {
        todos: TodoLifecycleService::new(
            Arc::new(InMemoryTodoRepository::new()),
            Arc::new(DefaultClock),
        ),
        auth: AuthService::new(
            Arc::new(InMemoryAccountRepository::new()),
            Arc::new(InMemorySessionStore::new()),
            Arc::new(Argon2PasswordHasher::new()),
            Arc::new(signer),
        ),
    }
}
