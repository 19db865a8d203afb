//! PostgreSQL-backed [`JournalRepository`].
//!
//! Entry ids come from `journal_entries_id_seq` so the domain can admit an
//! entry under its final id before the row is written.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{JournalPersistenceError, JournalRepository};
use crate::domain::{
    EntryContent, EntryId, GratitudeNotes, Journal, JournalEntry, JournalId, WellBeing,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{EntryContentChangeset, JournalEntryRow, NewJournalEntryRow, ReservedId};
use super::pool::{DbPool, PoolError};
use super::schema::journal_entries;

const RESERVE_ENTRY_ID: &str = "SELECT nextval('journal_entries_id_seq') AS id";

/// Diesel implementation of [`JournalRepository`].
#[derive(Clone)]
pub struct DieselJournalRepository {
    pool: DbPool,
}

impl DieselJournalRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> JournalPersistenceError {
    map_basic_pool_error(error, |message| JournalPersistenceError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> JournalPersistenceError {
    map_basic_diesel_error(
        error,
        JournalPersistenceError::query,
        JournalPersistenceError::connection,
    )
}

fn row_to_entry(row: JournalEntryRow) -> Result<JournalEntry, JournalPersistenceError> {
    let well_being = row.well_being.parse::<WellBeing>().map_err(|err| {
        warn!(entry_id = row.id, error = %err, "stored entry has unknown wellbeing");
        JournalPersistenceError::query("stored entry failed validation")
    })?;

    Ok(JournalEntry::new(
        EntryId::new(row.id),
        JournalId::new(row.journal_id),
        row.entry_date,
        EntryContent {
            well_being,
            notes: GratitudeNotes {
                grateful_for_today: row.grateful_for_today,
                grateful_for_today_description: row.grateful_for_today_description,
                grateful_for_in_life: row.grateful_for_in_life,
                grateful_for_in_life_description: row.grateful_for_in_life_description,
            },
        },
    ))
}

fn content_changeset(content: &EntryContent) -> EntryContentChangeset<'_> {
    let notes = &content.notes;
    EntryContentChangeset {
        well_being: content.well_being.as_str(),
        grateful_for_today: &notes.grateful_for_today,
        grateful_for_today_description: &notes.grateful_for_today_description,
        grateful_for_in_life: &notes.grateful_for_in_life,
        grateful_for_in_life_description: &notes.grateful_for_in_life_description,
    }
}

fn new_entry_row(entry: &JournalEntry) -> NewJournalEntryRow<'_> {
    let EntryContentChangeset {
        well_being,
        grateful_for_today,
        grateful_for_today_description,
        grateful_for_in_life,
        grateful_for_in_life_description,
    } = content_changeset(entry.content());
    NewJournalEntryRow {
        id: entry.id().get(),
        journal_id: entry.journal_id().get(),
        entry_date: entry.date(),
        well_being,
        grateful_for_today,
        grateful_for_today_description,
        grateful_for_in_life,
        grateful_for_in_life_description,
    }
}

#[async_trait]
impl JournalRepository for DieselJournalRepository {
    async fn load_journal(&self, id: JournalId) -> Result<Journal, JournalPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = journal_entries::table
            .filter(journal_entries::journal_id.eq(id.get()))
            .select(JournalEntryRow::as_select())
            .load::<JournalEntryRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let entries = rows
            .into_iter()
            .map(row_to_entry)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Journal::from_entries(id, entries))
    }

    async fn next_entry_id(&self) -> Result<EntryId, JournalPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let reserved = diesel::sql_query(RESERVE_ENTRY_ID)
            .get_result::<ReservedId>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(EntryId::new(reserved.id))
    }

    async fn insert_entry(&self, entry: &JournalEntry) -> Result<(), JournalPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(journal_entries::table)
            .values(new_entry_row(entry))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn find_entry(&self, id: EntryId) -> Result<Option<JournalEntry>, JournalPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = journal_entries::table
            .find(id.get())
            .select(JournalEntryRow::as_select())
            .first::<JournalEntryRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_entry).transpose()
    }

    async fn update_entry(&self, entry: &JournalEntry) -> Result<bool, JournalPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let updated = diesel::update(journal_entries::table.find(entry.id().get()))
            .set(content_changeset(entry.content()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(updated > 0)
    }

    async fn delete_entry(&self, id: EntryId) -> Result<bool, JournalPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(journal_entries::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }
}
