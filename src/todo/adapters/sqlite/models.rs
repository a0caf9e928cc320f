//! Diesel row models for lifecycle persistence.

use crate::store::schema::{categories, done_records, tasks};
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for categories.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryRow {
    pub id: i32,
    pub name: String,
}

/// Insert model for categories.
#[derive(Debug, Insertable)]
#[diesel(table_name = categories)]
pub struct NewCategoryRow<'a> {
    pub name: &'a str,
}

/// Query result row for live to-dos. The reserved owner column is not read.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    pub id: i32,
    pub name: String,
    pub category_id: Option<i32>,
    pub due_date: NaiveDate,
}

/// Insert model for live to-dos.
#[derive(Debug, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow<'a> {
    pub name: &'a str,
    pub category_id: Option<i32>,
    pub due_date: NaiveDate,
}

/// Query result row for archive entries.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = done_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DoneRecordRow {
    pub id: i32,
    pub name: String,
    pub category_name: Option<String>,
    pub completed_on: NaiveDate,
}

/// Insert model for archive entries.
#[derive(Debug, Insertable)]
#[diesel(table_name = done_records)]
pub struct NewDoneRecordRow<'a> {
    pub name: &'a str,
    pub category_name: Option<&'a str>,
    pub completed_on: NaiveDate,
}
