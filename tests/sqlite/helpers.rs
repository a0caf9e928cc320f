//! Shared helpers for SQLite integration tests.

use std::sync::Arc;

use gotdone::store::{StorePool, apply_schema, open_pool};
use gotdone::todo::{adapters::sqlite::SqliteTodoRepository, services::TodoLifecycleService};
use mockable::DefaultClock;
use rstest::fixture;
use tempfile::TempDir;

/// Lifecycle service over the SQLite repository.
pub type SqliteService = TodoLifecycleService<SqliteTodoRepository, DefaultClock>;

/// A migrated database file that is removed when dropped.
pub struct TempStore {
    pub dir: TempDir,
    pub pool: StorePool,
}

impl TempStore {
    /// Path of the database file.
    #[must_use]
    pub fn database_url(&self) -> String {
        self.dir.path().join("to-dos.db").to_string_lossy().into_owned()
    }

    /// Builds a repository sharing this store's pool.
    #[must_use]
    pub fn repository(&self) -> SqliteTodoRepository {
        SqliteTodoRepository::new(self.pool.clone())
    }

    /// Builds a lifecycle service sharing this store's pool.
    #[must_use]
    pub fn service(&self) -> SqliteService {
        TodoLifecycleService::new(Arc::new(self.repository()), Arc::new(DefaultClock))
    }
}

/// Provides a fresh migrated store for each test.
#[fixture]
pub fn store() -> TempStore {
    let dir = tempfile::tempdir().expect("create temporary directory");
    let url = dir.path().join("to-dos.db").to_string_lossy().into_owned();
    let pool = open_pool(&url, 4).expect("open store pool");
    apply_schema(&pool).expect("apply schema");
    TempStore { dir, pool }
}
