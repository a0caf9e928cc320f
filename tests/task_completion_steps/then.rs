//! Then steps for to-do completion scenarios.

use super::world::{CompletionWorld, run_async};
use gotdone::todo::{ports::TodoRepositoryError, services::TodoLifecycleError};
use rstest_bdd_macros::then;

#[then(r#"the done archive holds "{task_name}" under "{category_name}""#)]
fn archive_holds(
    world: &CompletionWorld,
    task_name: String,
    category_name: String,
) -> Result<(), eyre::Report> {
    let archived = run_async(world.service.list_done())
        .map_err(|err| eyre::eyre!("listing done archive failed: {err}"))?;
    let found = archived.iter().any(|record| {
        record.name() == task_name && record.category_name() == Some(category_name.as_str())
    });
    eyre::ensure!(
        found,
        "expected {task_name} under {category_name} in archive {archived:?}"
    );
    Ok(())
}

#[then("the to-do is no longer listed")]
fn todo_not_listed(world: &CompletionWorld) -> Result<(), eyre::Report> {
    let task_id = world.require_last_task()?.id();
    let found = run_async(world.service.find_task(task_id))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;
    eyre::ensure!(found.is_none(), "completed to-do still listed");
    Ok(())
}

#[then("the update fails because the to-do no longer exists")]
fn update_fails_not_found(world: &CompletionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_update_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result in scenario world"))?;
    eyre::ensure!(
        matches!(
            result,
            Err(TodoLifecycleError::Repository(TodoRepositoryError::TaskNotFound(_)))
        ),
        "expected TaskNotFound, got {result:?}"
    );
    Ok(())
}

#[then("the clear reports {count:u64} removed")]
fn clear_reports(world: &CompletionWorld, count: u64) -> Result<(), eyre::Report> {
    let cleared = world
        .cleared
        .ok_or_else(|| eyre::eyre!("archive was not cleared in this scenario"))?;
    eyre::ensure!(cleared == count, "expected {count} removed, got {cleared}");
    let remaining = run_async(world.service.list_done())
        .map_err(|err| eyre::eyre!("listing done archive failed: {err}"))?;
    eyre::ensure!(remaining.is_empty(), "archive not empty after clear");
    Ok(())
}

#[then("{count:usize} to-dos remain open")]
fn todos_remain_open(world: &CompletionWorld, count: usize) -> Result<(), eyre::Report> {
    let open = run_async(world.service.list_tasks())
        .map_err(|err| eyre::eyre!("listing to-dos failed: {err}"))?;
    eyre::ensure!(open.len() == count, "expected {count} open, got {}", open.len());
    Ok(())
}
