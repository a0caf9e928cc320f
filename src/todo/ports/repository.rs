//! Repository port for categories, to-dos and the done archive.
//!
//! Categories and to-dos share one port because completion and category
//! deletion must observe both tables inside a single transaction.

use crate::todo::domain::{
    Category, CategoryId, CategoryName, DoneRecord, Task, TaskDraft, TaskId, TodoSummary,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Result type for lifecycle repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Lifecycle persistence contract.
///
/// Every method is one atomic unit: on error, nothing it attempted is
/// visible to other callers.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Stores a new category and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::DuplicateCategory`] when the name is
    /// already taken.
    async fn insert_category(&self, name: &CategoryName) -> TodoRepositoryResult<Category>;

    /// Renames an existing category.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::CategoryNotFound`] when the category
    /// does not exist or [`TodoRepositoryError::DuplicateCategory`] when
    /// another category already has the name.
    async fn rename_category(
        &self,
        id: CategoryId,
        name: &CategoryName,
    ) -> TodoRepositoryResult<Category>;

    /// Finds a category by identifier.
    async fn find_category(&self, id: CategoryId) -> TodoRepositoryResult<Option<Category>>;

    /// Finds a category by exact name.
    async fn find_category_by_name(
        &self,
        name: &CategoryName,
    ) -> TodoRepositoryResult<Option<Category>>;

    /// Returns all categories in insertion order.
    async fn list_categories(&self) -> TodoRepositoryResult<Vec<Category>>;

    /// Deletes a category that no to-do references.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::CategoryInUse`] when at least one to-do
    /// still references the category, or
    /// [`TodoRepositoryError::CategoryNotFound`] when it does not exist.
    async fn delete_category(&self, id: CategoryId) -> TodoRepositoryResult<()>;

    /// Stores a new to-do.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::CategoryNotFound`] when the draft
    /// references a category that no longer exists.
    async fn insert_task(&self, draft: &TaskDraft) -> TodoRepositoryResult<Task>;

    /// Replaces the name, category and due date of an existing to-do.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::TaskNotFound`] when the to-do does not
    /// exist, or [`TodoRepositoryError::CategoryNotFound`] when the draft
    /// references a missing category.
    async fn update_task(&self, id: TaskId, draft: &TaskDraft) -> TodoRepositoryResult<Task>;

    /// Finds a live to-do by identifier.
    async fn find_task(&self, id: TaskId) -> TodoRepositoryResult<Option<Task>>;

    /// Returns all live to-dos in insertion order.
    async fn list_tasks(&self) -> TodoRepositoryResult<Vec<Task>>;

    /// Returns the live to-dos filed under a category, in insertion order.
    async fn list_tasks_in_category(&self, id: CategoryId) -> TodoRepositoryResult<Vec<Task>>;

    /// Hard-deletes a to-do without archiving it.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::TaskNotFound`] when the to-do does not
    /// exist.
    async fn delete_task(&self, id: TaskId) -> TodoRepositoryResult<()>;

    /// Archives a to-do as completed on `completed_on` and removes it from
    /// the live set.
    ///
    /// The archive entry captures the category name as it is at this moment.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::TaskNotFound`] when the to-do does not
    /// exist.
    async fn complete_task(
        &self,
        id: TaskId,
        completed_on: NaiveDate,
    ) -> TodoRepositoryResult<DoneRecord>;

    /// Returns every archive entry, newest completion first.
    async fn list_done(&self) -> TodoRepositoryResult<Vec<DoneRecord>>;

    /// Deletes every archive entry and returns how many were removed.
    async fn clear_done(&self) -> TodoRepositoryResult<u64>;

    /// Counts categories, live to-dos, to-dos due before `today` and archive
    /// entries from one consistent snapshot.
    async fn count_records(&self, today: NaiveDate) -> TodoRepositoryResult<TodoSummary>;
}

/// Errors returned by lifecycle repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// A category with the same name already exists.
    #[error("duplicate category name: {0}")]
    DuplicateCategory(CategoryName),

    /// The category was not found.
    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// The to-do was not found.
    #[error("to-do not found: {0}")]
    TaskNotFound(TaskId),

    /// The category still has to-dos filed under it.
    #[error("category {category_id} still has {task_count} to-do(s)")]
    CategoryInUse {
        /// Category whose deletion was refused.
        category_id: CategoryId,
        /// Number of to-dos referencing it.
        task_count: u64,
    },

    /// Stored data could not be reconstructed into domain values.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a data-quality error from stored rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
