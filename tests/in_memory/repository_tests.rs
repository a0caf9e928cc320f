//! In-memory repository guarantees exercised without the service layer.

use chrono::{Days, NaiveDate, Utc};
use gotdone::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::{
        Category, CategoryId, CategoryName, TaskDraft, TaskInput, TodoSummary,
        validate_task_input,
    },
    ports::{TodoRepository, TodoRepositoryError},
};
use rstest::{fixture, rstest};

#[fixture]
fn repository() -> InMemoryTodoRepository {
    InMemoryTodoRepository::new()
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn draft(
    name: &str,
    due: NaiveDate,
    category: Option<&Category>,
) -> Result<TaskDraft, eyre::Report> {
    let input = TaskInput::new(name, due);
    let (input_with_category, known) = match category {
        Some(found) => (input.with_category(found.id()), vec![found.clone()]),
        None => (input, Vec::new()),
    };
    Ok(validate_task_input(&input_with_category, &known, due)?)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_refuses_a_category_missing_from_the_store(
    repository: InMemoryTodoRepository,
) -> Result<(), eyre::Report> {
    let ghost_id = CategoryId::from_raw(99);
    let ghost = Category::new(ghost_id, CategoryName::new("Ghost")?);
    let orphan = draft("Orphan", today(), Some(&ghost))?;

    let result = repository.insert_task(&orphan).await;

    eyre::ensure!(
        matches!(result, Err(TodoRepositoryError::CategoryNotFound(id)) if id == ghost_id),
        "expected CategoryNotFound, got {result:?}"
    );
    eyre::ensure!(repository.list_tasks().await?.is_empty(), "orphan stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_refuses_a_category_deleted_after_validation(
    repository: InMemoryTodoRepository,
) -> Result<(), eyre::Report> {
    let work = repository
        .insert_category(&CategoryName::new("Work")?)
        .await?;
    let task = repository.insert_task(&draft("Draft", today(), None)?).await?;
    let moved = draft("Moved", today(), Some(&work))?;
    repository.delete_category(work.id()).await?;

    let result = repository.update_task(task.id(), &moved).await;

    eyre::ensure!(
        matches!(result, Err(TodoRepositoryError::CategoryNotFound(id)) if id == work.id()),
        "expected CategoryNotFound, got {result:?}"
    );
    let stored = repository.find_task(task.id()).await?;
    eyre::ensure!(stored.as_ref() == Some(&task), "task changed: {stored:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn record_counts_follow_the_given_day(
    repository: InMemoryTodoRepository,
) -> Result<(), eyre::Report> {
    let today = today();
    let next_week = today
        .checked_add_days(Days::new(7))
        .ok_or_else(|| eyre::eyre!("date out of range"))?;
    repository
        .insert_category(&CategoryName::new("Work")?)
        .await?;
    repository.insert_task(&draft("Today", today, None)?).await?;
    repository
        .insert_task(&draft("Next week", next_week, None)?)
        .await?;

    let counts = repository.count_records(next_week).await?;

    eyre::ensure!(
        counts
            == TodoSummary {
                categories: 1,
                tasks: 2,
                overdue: 1,
                done: 0,
            },
        "unexpected counts {counts:?}"
    );
    Ok(())
}
