//! Concurrent writers sharing one database file.

use super::helpers::{TempStore, store};
use gotdone::todo::{domain::TaskInput, ports::TodoRepositoryError, services::TodoLifecycleError};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_duplicate_creates_yield_exactly_one_category(
    store: TempStore,
) -> Result<(), eyre::Report> {
    let first = store.service();
    let second = store.service();

    let (left, right) = tokio::join!(first.create_category("Dup"), second.create_category("Dup"));

    let successes = [&left, &right].iter().filter(|result| result.is_ok()).count();
    let duplicates = [&left, &right]
        .iter()
        .filter(|result| {
            matches!(
                result,
                Err(TodoLifecycleError::Repository(
                    TodoRepositoryError::DuplicateCategory(_)
                ))
            )
        })
        .count();
    eyre::ensure!(
        successes == 1 && duplicates == 1,
        "expected one success and one duplicate, got {left:?} and {right:?}"
    );
    eyre::ensure!(
        first.list_categories().await?.len() == 1,
        "expected a single stored category"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_completions_archive_once(store: TempStore) -> Result<(), eyre::Report> {
    let service = store.service();
    let task = service
        .create_task(TaskInput::new("Race", service.today()))
        .await?;
    let other = store.service();

    let (left, right) = tokio::join!(service.complete_task(task.id()), other.complete_task(task.id()));

    eyre::ensure!(
        left.is_ok() != right.is_ok(),
        "expected exactly one completion, got {left:?} and {right:?}"
    );
    eyre::ensure!(service.list_done().await?.len() == 1, "archive row count");
    Ok(())
}
