//! Diesel row models for accounts.

use crate::store::schema::accounts;
use diesel::prelude::*;

/// Query result row for accounts.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountRow {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
}

/// Insert model for accounts.
#[derive(Debug, Insertable)]
#[diesel(table_name = accounts)]
pub struct NewAccountRow<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
    pub display_name: &'a str,
}
