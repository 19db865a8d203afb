//! Internal Diesel row structs.
//!
//! Rows never leave the persistence layer; repositories convert them to
//! domain types and validate stored names on the way out.

use chrono::NaiveDate;
use diesel::prelude::*;

use super::schema::{journal_entries, journals, users};

/// Row read from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub user_name: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct ProfileChangeset<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = journals)]
pub(crate) struct NewJournalRow {
    pub user_id: i64,
}

/// Row read from `journal_entries`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = journal_entries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct JournalEntryRow {
    pub id: i64,
    pub journal_id: i64,
    pub entry_date: NaiveDate,
    pub well_being: String,
    pub grateful_for_today: String,
    pub grateful_for_today_description: String,
    pub grateful_for_in_life: String,
    pub grateful_for_in_life_description: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = journal_entries)]
pub(crate) struct NewJournalEntryRow<'a> {
    pub id: i64,
    pub journal_id: i64,
    pub entry_date: NaiveDate,
    pub well_being: &'a str,
    pub grateful_for_today: &'a str,
    pub grateful_for_today_description: &'a str,
    pub grateful_for_in_life: &'a str,
    pub grateful_for_in_life_description: &'a str,
}

/// Mutable entry columns. Date and owning journal are never updated.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = journal_entries)]
pub(crate) struct EntryContentChangeset<'a> {
    pub well_being: &'a str,
    pub grateful_for_today: &'a str,
    pub grateful_for_today_description: &'a str,
    pub grateful_for_in_life: &'a str,
    pub grateful_for_in_life_description: &'a str,
}

/// Result of reserving an id from `journal_entries_id_seq`.
#[derive(Debug, Clone, QueryableByName)]
pub(crate) struct ReservedId {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub id: i64,
}
