//! Given steps for to-do completion scenarios.

use super::world::{CompletionWorld, run_async};
use eyre::WrapErr;
use gotdone::todo::domain::TaskInput;
use rstest_bdd_macros::given;

#[given(r#"a category named "{name}""#)]
fn category_named(world: &mut CompletionWorld, name: String) -> Result<(), eyre::Report> {
    let category = run_async(world.service.create_category(name.clone()))
        .wrap_err("create scenario category")?;
    world.categories.insert(name, category);
    Ok(())
}

#[given(r#"a to-do "{task_name}" filed under "{category_name}""#)]
fn todo_filed_under(
    world: &mut CompletionWorld,
    task_name: String,
    category_name: String,
) -> Result<(), eyre::Report> {
    let category_id = world
        .categories
        .get(&category_name)
        .map(gotdone::todo::domain::Category::id)
        .ok_or_else(|| eyre::eyre!("unknown scenario category {category_name}"))?;
    let input = TaskInput::new(task_name, world.service.today()).with_category(category_id);
    let task = run_async(world.service.create_task(input)).wrap_err("create scenario to-do")?;
    world.last_task = Some(task);
    Ok(())
}
