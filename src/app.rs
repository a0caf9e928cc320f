//! Application shell: owns the store handle and the wired services.

use std::sync::Arc;

use mockable::DefaultClock;
use tracing::info;

use crate::auth::{
    adapters::{
        hasher::Argon2PasswordHasher, memory::InMemorySessionStore, sqlite::SqliteAccountRepository,
    },
    domain::SessionSigner,
    services::{AuthService, AuthServiceError},
};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::store::{StoreError, StorePool, apply_schema, open_pool};
use crate::todo::{
    adapters::sqlite::SqliteTodoRepository,
    services::{TodoLifecycleService, TodoSummary},
};

/// Lifecycle service wired to SQLite and the system clock.
pub type SqliteTodoService = TodoLifecycleService<SqliteTodoRepository, DefaultClock>;

/// Authentication service wired to SQLite accounts and in-memory sessions.
pub type SqliteAuthService =
    AuthService<SqliteAccountRepository, InMemorySessionStore, Argon2PasswordHasher>;

/// An opened application.
///
/// [`App::open`] acquires the store and [`App::close`] releases it; nothing
/// reaches the store through globals.
pub struct App {
    pool: StorePool,
    todos: SqliteTodoService,
    auth: SqliteAuthService,
}

impl App {
    /// Opens the store, applies the schema and wires the services.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] when the database cannot be opened or
    /// initialised, and [`AppError::Auth`] when the signing secret is
    /// unusable.
    pub async fn open(config: &AppConfig) -> Result<Self, AppError> {
        let signer = SessionSigner::new(config.secret_key()).map_err(AuthServiceError::from)?;
        let database_url = config.database_url().to_owned();
        let pool_size = config.pool_size();

        let pool = tokio::task::spawn_blocking(move || {
            let pool = open_pool(&database_url, pool_size)?;
            apply_schema(&pool)?;
            Ok::<_, StoreError>(pool)
        })
        .await
        .map_err(StoreError::Blocking)??;

        let todos = TodoLifecycleService::new(
            Arc::new(SqliteTodoRepository::new(pool.clone())),
            Arc::new(DefaultClock),
        );
        let auth = AuthService::new(
            Arc::new(SqliteAccountRepository::new(pool.clone())),
            Arc::new(InMemorySessionStore::new()),
            Arc::new(Argon2PasswordHasher::new()),
            Arc::new(signer),
        );

        info!(database_url = config.database_url(), "application opened");
        Ok(Self { pool, todos, auth })
    }

    /// Returns the lifecycle service.
    #[must_use]
    pub const fn todos(&self) -> &SqliteTodoService {
        &self.todos
    }

    /// Returns the authentication service.
    #[must_use]
    pub const fn auth(&self) -> &SqliteAuthService {
        &self.auth
    }

    /// Returns the dashboard counts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Todo`] when the store cannot be read.
    pub async fn summary(&self) -> Result<TodoSummary, AppError> {
        Ok(self.todos.summary().await?)
    }

    /// Releases the services and the store handle.
    pub fn close(self) {
        let Self { pool, todos, auth } = self;
        drop(todos);
        drop(auth);
        let state = pool.state();
        drop(pool);
        info!(
            connections = state.connections,
            idle = state.idle_connections,
            "application closed"
        );
    }
}
