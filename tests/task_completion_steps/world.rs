//! Shared world state for to-do completion BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use gotdone::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::{Category, Task},
    services::{TodoLifecycleError, TodoLifecycleService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTodoService = TodoLifecycleService<InMemoryTodoRepository, DefaultClock>;

/// Scenario world for completion behaviour tests.
pub struct CompletionWorld {
    pub service: TestTodoService,
    pub categories: HashMap<String, Category>,
    pub last_task: Option<Task>,
    pub last_update_result: Option<Result<Task, TodoLifecycleError>>,
    pub cleared: Option<u64>,
}

impl CompletionWorld {
    /// Creates a world with an empty store.
    #[must_use]
    pub fn new() -> Self {
        let service = TodoLifecycleService::new(
            Arc::new(InMemoryTodoRepository::new()),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            categories: HashMap::new(),
            last_task: None,
            last_update_result: None,
            cleared: None,
        }
    }

    /// Returns the most recently created to-do.
    ///
    /// # Errors
    ///
    /// Returns an error if no to-do has been created in this scenario.
    pub fn require_last_task(&self) -> Result<&Task, eyre::Report> {
        self.last_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing to-do in scenario world"))
    }
}

impl Default for CompletionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CompletionWorld {
    CompletionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
