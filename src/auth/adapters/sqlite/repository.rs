//! SQLite repository implementation for accounts.

use super::models::{AccountRow, NewAccountRow};
use crate::auth::{
    domain::{Account, AccountId, DisplayName, EmailAddress, NewAccount, PasswordHash},
    ports::{AccountRepository, AccountRepositoryError, AccountRepositoryResult},
};
use crate::store::{StorePool, schema::accounts};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sql_types::Integer;
use diesel::sqlite::SqliteConnection;

/// SQLite-backed account repository.
#[derive(Debug, Clone)]
pub struct SqliteAccountRepository {
    pool: StorePool,
}

impl SqliteAccountRepository {
    /// Creates a repository over an open store pool.
    #[must_use]
    pub const fn new(pool: StorePool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AccountRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> AccountRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let shared_pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = shared_pool.get().map_err(AccountRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AccountRepositoryError::persistence)?
    }
}

impl From<DieselError> for AccountRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl AccountRepository for SqliteAccountRepository {
    async fn insert(&self, account: &NewAccount) -> AccountRepositoryResult<Account> {
        let new_account = account.clone();
        self.run_blocking(move |connection| {
            connection.immediate_transaction::<_, AccountRepositoryError, _>(|tx| {
                diesel::insert_into(accounts::table)
                    .values(&NewAccountRow {
                        email: new_account.email.as_str(),
                        password_hash: new_account.password_hash.as_str(),
                        display_name: new_account.display_name.as_str(),
                    })
                    .execute(tx)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            AccountRepositoryError::DuplicateEmail(new_account.email.clone())
                        }
                        other => AccountRepositoryError::persistence(other),
                    })?;
                let id = diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()"))
                    .get_result::<i32>(tx)?;
                Ok(Account::new(AccountId::from_raw(id), new_account))
            })
        })
        .await
    }

    async fn find_by_email(&self, email: &EmailAddress) -> AccountRepositoryResult<Option<Account>> {
        let lookup_email = email.clone();
        self.run_blocking(move |connection| {
            let row = accounts::table
                .filter(accounts::email.eq(lookup_email.as_str()))
                .select(AccountRow::as_select())
                .first::<AccountRow>(connection)
                .optional()?;
            row.map(row_to_account).transpose()
        })
        .await
    }

    async fn find_by_id(&self, id: AccountId) -> AccountRepositoryResult<Option<Account>> {
        self.run_blocking(move |connection| {
            let row = accounts::table
                .find(id.value())
                .select(AccountRow::as_select())
                .first::<AccountRow>(connection)
                .optional()?;
            row.map(row_to_account).transpose()
        })
        .await
    }
}

fn row_to_account(row: AccountRow) -> AccountRepositoryResult<Account> {
    let email = EmailAddress::new(row.email).map_err(AccountRepositoryError::invalid_persisted_data)?;
    let display_name =
        DisplayName::new(row.display_name).map_err(AccountRepositoryError::invalid_persisted_data)?;
    Ok(Account::new(
        AccountId::from_raw(row.id),
        NewAccount {
            email,
            display_name,
            password_hash: PasswordHash::from_phc(row.password_hash),
        },
    ))
}
