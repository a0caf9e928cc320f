//! Completion and archive tests.

use super::helpers::{TempStore, store};
use gotdone::todo::{domain::TaskInput, ports::TodoRepositoryError, services::TodoLifecycleError};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn snapshot_survives_category_rename(store: TempStore) -> Result<(), eyre::Report> {
    let service = store.service();
    let work = service.create_category("Work").await?;
    let task = service
        .create_task(TaskInput::new("Ship release", service.today()).with_category(work.id()))
        .await?;

    let record = service.complete_task(task.id()).await?;
    service.rename_category(work.id(), "Office").await?;

    eyre::ensure!(record.category_name() == Some("Work"), "snapshot {record:?}");
    let archived = service.list_done().await?;
    eyre::ensure!(archived == vec![record], "archive {archived:?}");
    eyre::ensure!(service.find_task(task.id()).await?.is_none(), "task not removed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn uncategorised_completion_archives_null_category(
    store: TempStore,
) -> Result<(), eyre::Report> {
    let service = store.service();
    let task = service
        .create_task(TaskInput::new("Loose end", service.today()))
        .await?;

    let record = service.complete_task(task.id()).await?;

    eyre::ensure!(record.category_name().is_none(), "expected no category");
    eyre::ensure!(record.completed_on() == service.today(), "wrong completion date");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_task_is_terminal(store: TempStore) -> Result<(), eyre::Report> {
    let service = store.service();
    let task = service
        .create_task(TaskInput::new("Once", service.today()))
        .await?;
    service.complete_task(task.id()).await?;

    let update = service
        .update_task(task.id(), TaskInput::new("Twice", service.today()))
        .await;
    let complete = service.complete_task(task.id()).await;

    eyre::ensure!(
        matches!(
            update,
            Err(TodoLifecycleError::Repository(TodoRepositoryError::TaskNotFound(_)))
        ),
        "update after completion: {update:?}"
    );
    eyre::ensure!(
        matches!(
            complete,
            Err(TodoLifecycleError::Repository(TodoRepositoryError::TaskNotFound(_)))
        ),
        "second completion: {complete:?}"
    );
    eyre::ensure!(service.list_done().await?.len() == 1, "duplicate archive row");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn archive_lists_newest_first(store: TempStore) -> Result<(), eyre::Report> {
    let service = store.service();
    let mut completed = Vec::new();
    for name in ["First", "Second", "Third"] {
        let task = service
            .create_task(TaskInput::new(name, service.today()))
            .await?;
        completed.push(service.complete_task(task.id()).await?);
    }
    completed.reverse();

    let archived = service.list_done().await?;

    eyre::ensure!(archived == completed, "archive order {archived:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clear_done_reports_count_and_leaves_live_data(
    store: TempStore,
) -> Result<(), eyre::Report> {
    let service = store.service();
    let work = service.create_category("Work").await?;
    for name in ["A", "B", "C"] {
        let task = service
            .create_task(TaskInput::new(name, service.today()).with_category(work.id()))
            .await?;
        service.complete_task(task.id()).await?;
    }
    let live = service
        .create_task(TaskInput::new("Still open", service.today()).with_category(work.id()))
        .await?;

    let removed = service.clear_done().await?;

    eyre::ensure!(removed == 3, "removed {removed}");
    eyre::ensure!(service.list_done().await?.is_empty(), "archive not empty");
    eyre::ensure!(service.list_tasks().await? == vec![live], "live tasks changed");
    eyre::ensure!(service.list_categories().await? == vec![work], "categories changed");
    Ok(())
}
