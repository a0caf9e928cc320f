//! Schema bootstrap and referential integrity.

use super::helpers::{TempStore, store};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use gotdone::store::apply_schema;
use gotdone::todo::domain::TaskInput;
use rstest::rstest;

#[rstest]
fn applying_the_schema_twice_is_harmless(store: TempStore) -> Result<(), eyre::Report> {
    apply_schema(&store.pool)?;
    apply_schema(&store.pool)?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_refuses_to_delete_a_referenced_category(
    store: TempStore,
) -> Result<(), eyre::Report> {
    let service = store.service();
    let work = service.create_category("Work").await?;
    service
        .create_task(TaskInput::new("Pinned", service.today()).with_category(work.id()))
        .await?;
    let pool = store.pool.clone();
    let category_id = work.id().value();

    let result = tokio::task::spawn_blocking(move || {
        let mut connection = pool.get()?;
        let outcome = diesel::sql_query("DELETE FROM categories WHERE id = ?")
            .bind::<diesel::sql_types::Integer, _>(category_id)
            .execute(&mut connection);
        Ok::<_, eyre::Report>(outcome)
    })
    .await??;

    eyre::ensure!(
        matches!(
            result,
            Err(DieselError::DatabaseError(
                DatabaseErrorKind::ForeignKeyViolation,
                _
            ))
        ),
        "expected a foreign key violation, got {result:?}"
    );
    eyre::ensure!(
        service.find_category(work.id()).await?.is_some(),
        "category row was removed"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reopening_the_file_keeps_committed_rows(store: TempStore) -> Result<(), eyre::Report> {
    let service = store.service();
    service.create_category("Persistent").await?;
    let url = store.database_url();

    let reopened = tokio::task::spawn_blocking(move || {
        let pool = gotdone::store::open_pool(&url, 1)?;
        apply_schema(&pool)?;
        Ok::<_, eyre::Report>(pool)
    })
    .await??;
    let names: Vec<String> = tokio::task::spawn_blocking(move || {
        let mut connection = reopened.get()?;
        let rows = diesel::sql_query("SELECT name FROM categories ORDER BY id")
            .load::<CategoryNameRow>(&mut connection)?;
        Ok::<_, eyre::Report>(rows.into_iter().map(|row| row.name).collect())
    })
    .await??;

    eyre::ensure!(names == ["Persistent"], "unexpected rows {names:?}");
    Ok(())
}

#[derive(QueryableByName)]
struct CategoryNameRow {
    #[diesel(sql_type = diesel::sql_types::Text)]
    name: String,
}
