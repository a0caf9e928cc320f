//! Session-gated lifecycle requests.

use super::helpers::{Harness, harness};
use gotdone::auth::services::AuthServiceError;
use gotdone::error::{AppError, ErrorKind};
use gotdone::todo::domain::{TaskInput, parse_due_date};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn requests_without_a_session_never_reach_the_store(
    harness: Harness,
) -> Result<(), eyre::Report> {
    let gate = harness.auth.require_session(None).await;

    let Err(err) = gate else {
        return Err(eyre::eyre!("anonymous request passed the gate"));
    };
    eyre::ensure!(matches!(err, AuthServiceError::Unauthenticated), "{err:?}");
    let app_err = AppError::from(err);
    eyre::ensure!(app_err.kind() == ErrorKind::Unauthenticated, "kind");
    eyre::ensure!(
        app_err.user_message() == "You need to login or register to continue.",
        "message {}",
        app_err.user_message()
    );
    eyre::ensure!(harness.todos.list_categories().await?.is_empty(), "store touched");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn signed_in_user_files_and_reassigns_a_todo(harness: Harness) -> Result<(), eyre::Report> {
    let token = harness.signed_in("ada@example.com").await?;
    harness.auth.require_session(Some(&token)).await?;

    let work = harness.todos.create_category("Work").await?;
    let home = harness.todos.create_category("Home").await?;
    let due = harness.todos.today();
    let task = harness
        .todos
        .create_task(TaskInput::new("Fix the sink", due).with_category(work.id()))
        .await?;

    harness.auth.require_session(Some(&token)).await?;
    harness
        .todos
        .update_task(
            task.id(),
            TaskInput::new("Fix the sink", due).with_category(home.id()),
        )
        .await?;

    let work_view = harness.todos.show_category("Work").await?;
    let home_view = harness.todos.show_category("Home").await?;
    eyre::ensure!(work_view.tasks.is_empty(), "task still under Work");
    eyre::ensure!(home_view.tasks.len() == 1, "task not under Home");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn form_dates_are_parsed_then_validated(harness: Harness) -> Result<(), eyre::Report> {
    let bad = parse_due_date("next tuesday");
    eyre::ensure!(bad.is_err(), "free text must not parse");

    let past = parse_due_date("2000-01-01")?;
    let result = harness
        .todos
        .create_task(TaskInput::new("Too late", past))
        .await;
    let Err(err) = result else {
        return Err(eyre::eyre!("past due date accepted"));
    };
    let app_err = AppError::from(err);
    eyre::ensure!(
        app_err.user_message() == "Due Date can't be in the past!",
        "message {}",
        app_err.user_message()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn busy_category_reports_how_to_proceed(harness: Harness) -> Result<(), eyre::Report> {
    let work = harness.todos.create_category("Work").await?;
    harness
        .todos
        .create_task(TaskInput::new("Pending", harness.todos.today()).with_category(work.id()))
        .await?;

    let Err(err) = harness.todos.delete_category(work.id()).await else {
        return Err(eyre::eyre!("busy category deleted"));
    };
    let app_err = AppError::from(err);

    eyre::ensure!(app_err.kind() == ErrorKind::CategoryInUse, "kind");
    eyre::ensure!(app_err.is_recoverable(), "should be recoverable");
    eyre::ensure!(
        app_err.user_message().contains("reassign or delete"),
        "message {}",
        app_err.user_message()
    );
    Ok(())
}
