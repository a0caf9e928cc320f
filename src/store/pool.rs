//! Connection pool construction and schema bootstrap.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError};
use diesel::sqlite::SqliteConnection;
use thiserror::Error;

/// SQLite connection pool type used by every adapter.
pub type StorePool = Pool<ConnectionManager<SqliteConnection>>;

/// SQL that creates the four application tables.
///
/// Every statement is `IF NOT EXISTS`, so applying it to an existing store is
/// a no-op.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_todo_tables/up.sql");

/// Per-connection settings. SQLite scopes all three to the connection, so
/// they run on every acquire.
const CONNECTION_PRAGMAS: &str = concat!(
    "PRAGMA foreign_keys = ON;",
    "PRAGMA busy_timeout = 5000;",
    "PRAGMA journal_mode = WAL;",
);

/// Errors raised while opening or bootstrapping the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The pool could not be built or a connection could not be checked out.
    #[error("store connection failed: {0}")]
    Pool(#[source] PoolError),

    /// The schema SQL failed to apply.
    #[error("failed to apply store schema: {0}")]
    Schema(#[source] diesel::result::Error),

    /// The blocking task running store setup panicked or was cancelled.
    #[error("store setup task failed: {0}")]
    Blocking(#[source] tokio::task::JoinError),
}

#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute(CONNECTION_PRAGMAS)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Opens a connection pool against the SQLite database at `database_url`.
///
/// The file is created if it does not exist.
///
/// # Errors
///
/// Returns [`StoreError::Pool`] when the initial connections cannot be
/// established.
pub fn open_pool(database_url: &str, max_size: u32) -> Result<StorePool, StoreError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)
        .map_err(StoreError::Pool)?;
    tracing::debug!(database_url, max_size, "opened store pool");
    Ok(pool)
}

/// Applies [`CREATE_SCHEMA_SQL`] using one pooled connection.
///
/// This is a blocking call; async callers run it on a blocking thread.
///
/// # Errors
///
/// Returns [`StoreError::Pool`] when no connection is available or
/// [`StoreError::Schema`] when the SQL fails.
pub fn apply_schema(pool: &StorePool) -> Result<(), StoreError> {
    let mut connection = pool.get().map_err(StoreError::Pool)?;
    connection
        .batch_execute(CREATE_SCHEMA_SQL)
        .map_err(StoreError::Schema)?;
    tracing::info!("store schema applied");
    Ok(())
}
