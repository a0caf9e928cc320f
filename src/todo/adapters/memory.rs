//! In-memory lifecycle repository for tests.
//!
//! A single lock guards all three collections, so every operation is atomic
//! with respect to every other.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::todo::{
    domain::{
        Category, CategoryId, CategoryName, CompletionSnapshot, DoneRecord, DoneRecordId, Task,
        TaskDraft, TaskId, TodoSummary,
    },
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory lifecycle repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    categories: BTreeMap<CategoryId, Category>,
    tasks: BTreeMap<TaskId, Task>,
    done: BTreeMap<DoneRecordId, DoneRecord>,
    last_category_id: i32,
    last_task_id: i32,
    last_done_id: i32,
}

impl InMemoryTodoState {
    fn name_taken(&self, name: &CategoryName, except: Option<CategoryId>) -> bool {
        self.categories
            .values()
            .any(|category| category.name() == name && Some(category.id()) != except)
    }

    fn ensure_category(&self, category_id: Option<CategoryId>) -> TodoRepositoryResult<()> {
        match category_id {
            Some(id) if !self.categories.contains_key(&id) => {
                Err(TodoRepositoryError::CategoryNotFound(id))
            }
            _ => Ok(()),
        }
    }
}

/// Advances an identifier counter. Identifiers are never reused.
fn allocate(counter: &mut i32) -> TodoRepositoryResult<i32> {
    *counter = counter.checked_add(1).ok_or_else(|| {
        TodoRepositoryError::persistence(std::io::Error::other("identifier space exhausted"))
    })?;
    Ok(*counter)
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TodoRepositoryResult<RwLockReadGuard<'_, InMemoryTodoState>> {
        self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TodoRepositoryResult<RwLockWriteGuard<'_, InMemoryTodoState>> {
        self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert_category(&self, name: &CategoryName) -> TodoRepositoryResult<Category> {
        let mut state = self.write()?;
        if state.name_taken(name, None) {
            return Err(TodoRepositoryError::DuplicateCategory(name.clone()));
        }

        let id = CategoryId::from_raw(allocate(&mut state.last_category_id)?);
        let category = Category::new(id, name.clone());
        state.categories.insert(id, category.clone());
        Ok(category)
    }

    async fn rename_category(
        &self,
        id: CategoryId,
        name: &CategoryName,
    ) -> TodoRepositoryResult<Category> {
        let mut state = self.write()?;
        if !state.categories.contains_key(&id) {
            return Err(TodoRepositoryError::CategoryNotFound(id));
        }
        if state.name_taken(name, Some(id)) {
            return Err(TodoRepositoryError::DuplicateCategory(name.clone()));
        }

        let renamed = Category::new(id, name.clone());
        state.categories.insert(id, renamed.clone());
        Ok(renamed)
    }

    async fn find_category(&self, id: CategoryId) -> TodoRepositoryResult<Option<Category>> {
        let state = self.read()?;
        Ok(state.categories.get(&id).cloned())
    }

    async fn find_category_by_name(
        &self,
        name: &CategoryName,
    ) -> TodoRepositoryResult<Option<Category>> {
        let state = self.read()?;
        Ok(state
            .categories
            .values()
            .find(|category| category.name() == name)
            .cloned())
    }

    async fn list_categories(&self) -> TodoRepositoryResult<Vec<Category>> {
        let state = self.read()?;
        Ok(state.categories.values().cloned().collect())
    }

    async fn delete_category(&self, id: CategoryId) -> TodoRepositoryResult<()> {
        let mut state = self.write()?;
        if !state.categories.contains_key(&id) {
            return Err(TodoRepositoryError::CategoryNotFound(id));
        }

        let task_count = state
            .tasks
            .values()
            .filter(|task| task.category_id() == Some(id))
            .count();
        if task_count > 0 {
            return Err(TodoRepositoryError::CategoryInUse {
                category_id: id,
                task_count: u64::try_from(task_count).unwrap_or(u64::MAX),
            });
        }

        state.categories.remove(&id);
        Ok(())
    }

    async fn insert_task(&self, draft: &TaskDraft) -> TodoRepositoryResult<Task> {
        let mut state = self.write()?;
        state.ensure_category(draft.category_id())?;

        let id = TaskId::from_raw(allocate(&mut state.last_task_id)?);
        let task = Task::from_draft(id, draft.clone());
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: TaskId, draft: &TaskDraft) -> TodoRepositoryResult<Task> {
        let mut state = self.write()?;
        if !state.tasks.contains_key(&id) {
            return Err(TodoRepositoryError::TaskNotFound(id));
        }
        state.ensure_category(draft.category_id())?;

        let task = Task::from_draft(id, draft.clone());
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn find_task(&self, id: TaskId) -> TodoRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_tasks(&self) -> TodoRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn list_tasks_in_category(&self, id: CategoryId) -> TodoRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.category_id() == Some(id))
            .cloned()
            .collect())
    }

    async fn delete_task(&self, id: TaskId) -> TodoRepositoryResult<()> {
        let mut state = self.write()?;
        state
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TodoRepositoryError::TaskNotFound(id))
    }

    async fn complete_task(
        &self,
        id: TaskId,
        completed_on: NaiveDate,
    ) -> TodoRepositoryResult<DoneRecord> {
        let mut state = self.write()?;
        let task = state
            .tasks
            .get(&id)
            .cloned()
            .ok_or(TodoRepositoryError::TaskNotFound(id))?;

        let category_name = task
            .category_id()
            .and_then(|category_id| state.categories.get(&category_id))
            .map(|category| category.name().as_str().to_owned());
        let snapshot = CompletionSnapshot::capture(&task, category_name.as_deref(), completed_on);

        // Allocate before mutating so an exhausted counter leaves the task live.
        let done_id = DoneRecordId::from_raw(allocate(&mut state.last_done_id)?);
        let record = DoneRecord::new(done_id, snapshot);
        state.done.insert(done_id, record.clone());
        state.tasks.remove(&id);
        Ok(record)
    }

    async fn list_done(&self) -> TodoRepositoryResult<Vec<DoneRecord>> {
        let state = self.read()?;
        let mut records: Vec<DoneRecord> = state.done.values().cloned().collect();
        records.sort_by(|a, b| {
            b.completed_on()
                .cmp(&a.completed_on())
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(records)
    }

    async fn clear_done(&self) -> TodoRepositoryResult<u64> {
        let mut state = self.write()?;
        let removed = state.done.len();
        state.done.clear();
        Ok(u64::try_from(removed).unwrap_or(u64::MAX))
    }

    async fn count_records(&self, today: NaiveDate) -> TodoRepositoryResult<TodoSummary> {
        let state = self.read()?;
        Ok(TodoSummary {
            categories: state.categories.len(),
            tasks: state.tasks.len(),
            overdue: state
                .tasks
                .values()
                .filter(|task| task.is_overdue(today))
                .count(),
            done: state.done.len(),
        })
    }
}
