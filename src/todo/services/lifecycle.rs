//! Service layer for categories, to-dos and the done archive.

use crate::error::ErrorKind;
use crate::todo::{
    domain::{
        Category, CategoryId, CategoryName, CategoryOverview, DoneRecord, Task, TaskId, TaskInput,
        TodoDomainError, TodoSummary, validate_task_input,
    },
    ports::{TodoRepository, TodoRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for lifecycle operations.
#[derive(Debug, Error)]
pub enum TodoLifecycleError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
    /// No category has the requested name. Holds the trimmed lookup key.
    #[error("category not found: {0}")]
    CategoryNameNotFound(String),
}

impl TodoLifecycleError {
    /// Classifies the error for presentation.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(TodoDomainError::UnknownCategory(_)) | Self::CategoryNameNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::Domain(_) => ErrorKind::Validation,
            Self::Repository(err) => match err {
                TodoRepositoryError::DuplicateCategory(_) => ErrorKind::DuplicateEntity,
                TodoRepositoryError::CategoryNotFound(_) | TodoRepositoryError::TaskNotFound(_) => {
                    ErrorKind::NotFound
                }
                TodoRepositoryError::CategoryInUse { .. } => ErrorKind::CategoryInUse,
                TodoRepositoryError::InvalidPersistedData(_)
                | TodoRepositoryError::Persistence(_) => ErrorKind::Internal,
            },
        }
    }
}

/// Result type for lifecycle service operations.
pub type TodoLifecycleResult<T> = Result<T, TodoLifecycleError>;

/// Lifecycle orchestration service.
///
/// Callers are expected to have passed the session gate
/// ([`crate::auth::services::AuthService::require_session`]) before any
/// mutating call.
#[derive(Clone)]
pub struct TodoLifecycleService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TodoLifecycleService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns the calendar date due dates are validated against.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }

    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Domain`] for an invalid name and
    /// [`TodoRepositoryError::DuplicateCategory`] when the name is taken; the
    /// existing category is left untouched.
    pub async fn create_category(
        &self,
        raw_name: impl Into<String>,
    ) -> TodoLifecycleResult<Category> {
        let name = CategoryName::new(raw_name)?;
        let category = self.repository.insert_category(&name).await?;
        info!(category_id = %category.id(), name = %category.name(), "category created");
        Ok(category)
    }

    /// Renames a category. Archived records keep the old name.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Domain`] for an invalid name,
    /// [`TodoRepositoryError::CategoryNotFound`] when the category does not
    /// exist, or [`TodoRepositoryError::DuplicateCategory`] when another
    /// category has the name.
    pub async fn rename_category(
        &self,
        id: CategoryId,
        new_name: impl Into<String>,
    ) -> TodoLifecycleResult<Category> {
        let name = CategoryName::new(new_name)?;
        let category = self.repository.rename_category(id, &name).await?;
        info!(category_id = %id, name = %category.name(), "category renamed");
        Ok(category)
    }

    /// Returns all categories in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Repository`] when the lookup fails.
    pub async fn list_categories(&self) -> TodoLifecycleResult<Vec<Category>> {
        Ok(self.repository.list_categories().await?)
    }

    /// Finds a category by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Repository`] when the lookup fails.
    pub async fn find_category(&self, id: CategoryId) -> TodoLifecycleResult<Option<Category>> {
        Ok(self.repository.find_category(id).await?)
    }

    /// Returns a category looked up by name together with its to-dos.
    ///
    /// A name that could never be stored (empty or over-long) is simply not
    /// found.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::CategoryNameNotFound`] when no category
    /// has the name.
    pub async fn show_category(&self, raw_name: &str) -> TodoLifecycleResult<CategoryOverview> {
        let lookup_key = raw_name.trim();
        debug!(name = lookup_key, "looking up category");
        let Ok(name) = CategoryName::new(lookup_key) else {
            return Err(TodoLifecycleError::CategoryNameNotFound(lookup_key.to_owned()));
        };
        let category = self
            .repository
            .find_category_by_name(&name)
            .await?
            .ok_or_else(|| TodoLifecycleError::CategoryNameNotFound(lookup_key.to_owned()))?;
        let tasks = self.repository.list_tasks_in_category(category.id()).await?;
        Ok(CategoryOverview { category, tasks })
    }

    /// Deletes a category that has no to-dos.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::CategoryInUse`] while to-dos still
    /// reference the category, and [`TodoRepositoryError::CategoryNotFound`]
    /// when it does not exist.
    pub async fn delete_category(&self, id: CategoryId) -> TodoLifecycleResult<()> {
        match self.repository.delete_category(id).await {
            Ok(()) => {
                info!(category_id = %id, "category deleted");
                Ok(())
            }
            Err(err) => {
                if let TodoRepositoryError::CategoryInUse { task_count, .. } = &err {
                    warn!(category_id = %id, task_count, "category deletion blocked");
                }
                Err(err.into())
            }
        }
    }

    /// Validates input and creates a to-do.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Domain`] when the name is empty, the due
    /// date lies in the past or the category is unknown, and
    /// [`TodoRepositoryError::CategoryNotFound`] when the category vanished
    /// after validation.
    pub async fn create_task(&self, input: TaskInput) -> TodoLifecycleResult<Task> {
        let categories = self.repository.list_categories().await?;
        let draft = validate_task_input(&input, &categories, self.today())?;
        let task = self.repository.insert_task(&draft).await?;
        info!(task_id = %task.id(), due_date = %task.due_date(), "to-do created");
        Ok(task)
    }

    /// Replaces the name, category and due date of a to-do.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::TaskNotFound`] when the to-do is not
    /// live (never created, deleted or completed), and the same validation
    /// errors as [`Self::create_task`].
    pub async fn update_task(&self, id: TaskId, input: TaskInput) -> TodoLifecycleResult<Task> {
        if self.repository.find_task(id).await?.is_none() {
            return Err(TodoRepositoryError::TaskNotFound(id).into());
        }
        let categories = self.repository.list_categories().await?;
        let draft = validate_task_input(&input, &categories, self.today())?;
        let task = self.repository.update_task(id, &draft).await?;
        info!(task_id = %id, "to-do updated");
        Ok(task)
    }

    /// Finds a live to-do by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Repository`] when the lookup fails.
    pub async fn find_task(&self, id: TaskId) -> TodoLifecycleResult<Option<Task>> {
        Ok(self.repository.find_task(id).await?)
    }

    /// Returns all live to-dos in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Repository`] when the lookup fails.
    pub async fn list_tasks(&self) -> TodoLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_tasks().await?)
    }

    /// Deletes a to-do without archiving it.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::TaskNotFound`] when the to-do does not
    /// exist.
    pub async fn delete_task(&self, id: TaskId) -> TodoLifecycleResult<()> {
        self.repository.delete_task(id).await?;
        info!(task_id = %id, "to-do deleted");
        Ok(())
    }

    /// Marks a to-do done: archives a snapshot dated today and removes the
    /// live to-do, atomically.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::TaskNotFound`] when the to-do does not
    /// exist.
    pub async fn complete_task(&self, id: TaskId) -> TodoLifecycleResult<DoneRecord> {
        let record = self.repository.complete_task(id, self.today()).await?;
        info!(
            task_id = %id,
            done_id = %record.id(),
            category = record.category_name().unwrap_or_default(),
            "to-do completed"
        );
        Ok(record)
    }

    /// Returns the archive, newest completion first.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Repository`] when the lookup fails.
    pub async fn list_done(&self) -> TodoLifecycleResult<Vec<DoneRecord>> {
        Ok(self.repository.list_done().await?)
    }

    /// Empties the archive and returns how many records were removed.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Repository`] when the delete fails.
    pub async fn clear_done(&self) -> TodoLifecycleResult<u64> {
        let removed = self.repository.clear_done().await?;
        info!(removed, "done archive cleared");
        Ok(removed)
    }

    /// Counts categories, live and overdue to-dos, and archived records.
    ///
    /// # Errors
    ///
    /// Returns [`TodoLifecycleError::Repository`] when a lookup fails.
    pub async fn summary(&self) -> TodoLifecycleResult<TodoSummary> {
        Ok(self.repository.count_records(self.today()).await?)
    }
}
