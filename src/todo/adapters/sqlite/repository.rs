//! SQLite repository implementation for lifecycle storage.

use super::models::{
    CategoryRow, DoneRecordRow, NewCategoryRow, NewDoneRecordRow, NewTaskRow, TaskRow,
};
use crate::store::{
    StorePool,
    schema::{categories, done_records, tasks},
};
use crate::todo::{
    domain::{
        Category, CategoryId, CategoryName, CompletionSnapshot, DoneRecord, DoneRecordId,
        PersistedTaskData, Task, TaskDraft, TaskId, TaskName, TodoSummary,
    },
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sql_types::Integer;
use diesel::sqlite::SqliteConnection;

/// SQLite-backed lifecycle repository.
///
/// Writes run inside `BEGIN IMMEDIATE` transactions so existence checks and
/// the statements that depend on them see the same snapshot.
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    pool: StorePool,
}

impl SqliteTodoRepository {
    /// Creates a repository over an open store pool.
    #[must_use]
    pub const fn new(pool: StorePool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let shared_pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = shared_pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

impl From<DieselError> for TodoRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn insert_category(&self, name: &CategoryName) -> TodoRepositoryResult<Category> {
        let owned_name = name.clone();
        self.run_blocking(move |connection| {
            connection.immediate_transaction::<_, TodoRepositoryError, _>(|tx| {
                diesel::insert_into(categories::table)
                    .values(&NewCategoryRow {
                        name: owned_name.as_str(),
                    })
                    .execute(tx)
                    .map_err(|err| map_category_write_error(err, &owned_name))?;
                let id = last_insert_id(tx)?;
                Ok(Category::new(CategoryId::from_raw(id), owned_name))
            })
        })
        .await
    }

    async fn rename_category(
        &self,
        id: CategoryId,
        name: &CategoryName,
    ) -> TodoRepositoryResult<Category> {
        let owned_name = name.clone();
        self.run_blocking(move |connection| {
            connection.immediate_transaction::<_, TodoRepositoryError, _>(|tx| {
                let updated = diesel::update(categories::table.find(id.value()))
                    .set(categories::name.eq(owned_name.as_str()))
                    .execute(tx)
                    .map_err(|err| map_category_write_error(err, &owned_name))?;
                if updated == 0 {
                    return Err(TodoRepositoryError::CategoryNotFound(id));
                }
                Ok(Category::new(id, owned_name))
            })
        })
        .await
    }

    async fn find_category(&self, id: CategoryId) -> TodoRepositoryResult<Option<Category>> {
        self.run_blocking(move |connection| {
            let row = categories::table
                .find(id.value())
                .select(CategoryRow::as_select())
                .first::<CategoryRow>(connection)
                .optional()?;
            row.map(row_to_category).transpose()
        })
        .await
    }

    async fn find_category_by_name(
        &self,
        name: &CategoryName,
    ) -> TodoRepositoryResult<Option<Category>> {
        let owned_name = name.clone();
        self.run_blocking(move |connection| {
            let row = categories::table
                .filter(categories::name.eq(owned_name.as_str()))
                .select(CategoryRow::as_select())
                .first::<CategoryRow>(connection)
                .optional()?;
            row.map(row_to_category).transpose()
        })
        .await
    }

    async fn list_categories(&self) -> TodoRepositoryResult<Vec<Category>> {
        self.run_blocking(|connection| {
            let rows = categories::table
                .order(categories::id.asc())
                .select(CategoryRow::as_select())
                .load::<CategoryRow>(connection)?;
            rows.into_iter().map(row_to_category).collect()
        })
        .await
    }

    async fn delete_category(&self, id: CategoryId) -> TodoRepositoryResult<()> {
        self.run_blocking(move |connection| {
            connection.immediate_transaction::<_, TodoRepositoryError, _>(|tx| {
                let task_count: i64 = tasks::table
                    .filter(tasks::category_id.eq(id.value()))
                    .count()
                    .get_result(tx)?;
                if task_count > 0 {
                    return Err(TodoRepositoryError::CategoryInUse {
                        category_id: id,
                        task_count: u64::try_from(task_count).unwrap_or_default(),
                    });
                }

                let deleted = diesel::delete(categories::table.find(id.value())).execute(tx)?;
                if deleted == 0 {
                    return Err(TodoRepositoryError::CategoryNotFound(id));
                }
                Ok(())
            })
        })
        .await
    }

    async fn insert_task(&self, draft: &TaskDraft) -> TodoRepositoryResult<Task> {
        let owned_draft = draft.clone();
        self.run_blocking(move |connection| {
            connection.immediate_transaction::<_, TodoRepositoryError, _>(|tx| {
                ensure_category_exists(tx, owned_draft.category_id())?;
                diesel::insert_into(tasks::table)
                    .values(&NewTaskRow {
                        name: owned_draft.name().as_str(),
                        category_id: owned_draft.category_id().map(CategoryId::value),
                        due_date: owned_draft.due_date(),
                    })
                    .execute(tx)?;
                let id = last_insert_id(tx)?;
                Ok(Task::from_draft(TaskId::from_raw(id), owned_draft))
            })
        })
        .await
    }

    async fn update_task(&self, id: TaskId, draft: &TaskDraft) -> TodoRepositoryResult<Task> {
        let owned_draft = draft.clone();
        self.run_blocking(move |connection| {
            connection.immediate_transaction::<_, TodoRepositoryError, _>(|tx| {
                let exists = tasks::table
                    .find(id.value())
                    .select(tasks::id)
                    .first::<i32>(tx)
                    .optional()?
                    .is_some();
                if !exists {
                    return Err(TodoRepositoryError::TaskNotFound(id));
                }
                ensure_category_exists(tx, owned_draft.category_id())?;

                diesel::update(tasks::table.find(id.value()))
                    .set((
                        tasks::name.eq(owned_draft.name().as_str()),
                        tasks::category_id.eq(owned_draft.category_id().map(CategoryId::value)),
                        tasks::due_date.eq(owned_draft.due_date()),
                    ))
                    .execute(tx)?;
                Ok(Task::from_draft(id, owned_draft))
            })
        })
        .await
    }

    async fn find_task(&self, id: TaskId) -> TodoRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_tasks(&self) -> TodoRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_tasks_in_category(&self, id: CategoryId) -> TodoRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::category_id.eq(id.value()))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn delete_task(&self, id: TaskId) -> TodoRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(tasks::table.find(id.value())).execute(connection)?;
            if deleted == 0 {
                return Err(TodoRepositoryError::TaskNotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn complete_task(
        &self,
        id: TaskId,
        completed_on: NaiveDate,
    ) -> TodoRepositoryResult<DoneRecord> {
        self.run_blocking(move |connection| {
            connection.immediate_transaction::<_, TodoRepositoryError, _>(|tx| {
                let found = tasks::table
                    .left_join(categories::table)
                    .filter(tasks::id.eq(id.value()))
                    .select((TaskRow::as_select(), categories::name.nullable()))
                    .first::<(TaskRow, Option<String>)>(tx)
                    .optional()?;
                let Some((row, category_name)) = found else {
                    return Err(TodoRepositoryError::TaskNotFound(id));
                };

                let task = row_to_task(row)?;
                let snapshot =
                    CompletionSnapshot::capture(&task, category_name.as_deref(), completed_on);

                diesel::insert_into(done_records::table)
                    .values(&NewDoneRecordRow {
                        name: snapshot.name(),
                        category_name: snapshot.category_name(),
                        completed_on: snapshot.completed_on(),
                    })
                    .execute(tx)?;
                let done_id = last_insert_id(tx)?;
                diesel::delete(tasks::table.find(id.value())).execute(tx)?;

                Ok(DoneRecord::new(DoneRecordId::from_raw(done_id), snapshot))
            })
        })
        .await
    }

    async fn list_done(&self) -> TodoRepositoryResult<Vec<DoneRecord>> {
        self.run_blocking(|connection| {
            let rows = done_records::table
                .order((done_records::completed_on.desc(), done_records::id.desc()))
                .select(DoneRecordRow::as_select())
                .load::<DoneRecordRow>(connection)?;
            Ok(rows.into_iter().map(row_to_done_record).collect())
        })
        .await
    }

    async fn clear_done(&self) -> TodoRepositoryResult<u64> {
        self.run_blocking(|connection| {
            let removed = diesel::delete(done_records::table).execute(connection)?;
            Ok(u64::try_from(removed).unwrap_or(u64::MAX))
        })
        .await
    }

    async fn count_records(&self, today: NaiveDate) -> TodoRepositoryResult<TodoSummary> {
        self.run_blocking(move |connection| {
            connection.transaction::<_, TodoRepositoryError, _>(|tx| {
                let category_count: i64 = categories::table.count().get_result(tx)?;
                let task_count: i64 = tasks::table.count().get_result(tx)?;
                let overdue_count: i64 = tasks::table
                    .filter(tasks::due_date.lt(today))
                    .count()
                    .get_result(tx)?;
                let done_count: i64 = done_records::table.count().get_result(tx)?;
                Ok(TodoSummary {
                    categories: count_to_usize(category_count)?,
                    tasks: count_to_usize(task_count)?,
                    overdue: count_to_usize(overdue_count)?,
                    done: count_to_usize(done_count)?,
                })
            })
        })
        .await
    }
}

fn count_to_usize(count: i64) -> TodoRepositoryResult<usize> {
    usize::try_from(count).map_err(TodoRepositoryError::invalid_persisted_data)
}

/// Reads the rowid assigned by the last insert on this connection.
fn last_insert_id(connection: &mut SqliteConnection) -> TodoRepositoryResult<i32> {
    Ok(
        diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()"))
            .get_result::<i32>(connection)?,
    )
}

fn ensure_category_exists(
    connection: &mut SqliteConnection,
    category_id: Option<CategoryId>,
) -> TodoRepositoryResult<()> {
    let Some(id) = category_id else {
        return Ok(());
    };
    let found = categories::table
        .find(id.value())
        .select(categories::id)
        .first::<i32>(connection)
        .optional()?;
    found
        .map(|_| ())
        .ok_or(TodoRepositoryError::CategoryNotFound(id))
}

/// `categories.name` carries the only unique constraint on the table.
fn map_category_write_error(err: DieselError, name: &CategoryName) -> TodoRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            TodoRepositoryError::DuplicateCategory(name.clone())
        }
        other => TodoRepositoryError::persistence(other),
    }
}

fn row_to_category(row: CategoryRow) -> TodoRepositoryResult<Category> {
    let name = CategoryName::new(row.name).map_err(TodoRepositoryError::invalid_persisted_data)?;
    Ok(Category::new(CategoryId::from_raw(row.id), name))
}

fn row_to_task(row: TaskRow) -> TodoRepositoryResult<Task> {
    let TaskRow {
        id,
        name: raw_name,
        category_id,
        due_date,
    } = row;
    let name = TaskName::new(raw_name).map_err(TodoRepositoryError::invalid_persisted_data)?;
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_raw(id),
        name,
        category_id: category_id.map(CategoryId::from_raw),
        due_date,
    }))
}

fn row_to_done_record(row: DoneRecordRow) -> DoneRecord {
    let DoneRecordRow {
        id,
        name,
        category_name,
        completed_on,
    } = row;
    DoneRecord::new(
        DoneRecordId::from_raw(id),
        CompletionSnapshot::from_persisted(name, category_name, completed_on),
    )
}
