//! When steps for to-do completion scenarios.

use super::world::{CompletionWorld, run_async};
use eyre::WrapErr;
use gotdone::todo::domain::TaskInput;
use rstest_bdd_macros::when;

#[when("the to-do is marked done")]
fn mark_done(world: &mut CompletionWorld) -> Result<(), eyre::Report> {
    let task_id = world.require_last_task()?.id();
    run_async(world.service.complete_task(task_id)).wrap_err("complete scenario to-do")?;
    Ok(())
}

#[when(r#"the category "{from}" is renamed to "{to}""#)]
fn rename_category(world: &mut CompletionWorld, from: String, to: String) -> Result<(), eyre::Report> {
    let category = world
        .categories
        .remove(&from)
        .ok_or_else(|| eyre::eyre!("unknown scenario category {from}"))?;
    let renamed = run_async(world.service.rename_category(category.id(), to.clone()))
        .wrap_err("rename scenario category")?;
    world.categories.insert(to, renamed);
    Ok(())
}

#[when(r#"the to-do is renamed to "{new_name}""#)]
fn rename_todo(world: &mut CompletionWorld, new_name: String) -> Result<(), eyre::Report> {
    let task = world.require_last_task()?.clone();
    let mut input = TaskInput::new(new_name, task.due_date());
    if let Some(category_id) = task.category_id() {
        input = input.with_category(category_id);
    }
    world.last_update_result = Some(run_async(world.service.update_task(task.id(), input)));
    Ok(())
}

#[when("the done archive is cleared")]
fn clear_archive(world: &mut CompletionWorld) -> Result<(), eyre::Report> {
    let removed = run_async(world.service.clear_done()).wrap_err("clear done archive")?;
    world.cleared = Some(removed);
    Ok(())
}
