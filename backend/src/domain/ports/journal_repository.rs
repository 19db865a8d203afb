//! Port abstraction for journal entry persistence.
use async_trait::async_trait;

use crate::domain::{EntryId, Journal, JournalEntry, JournalId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by journal repository adapters.
    pub enum JournalPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "journal repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "journal repository query failed: {message}",
    }
}

/// Driven port for journal aggregates and their entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JournalRepository: Send + Sync {
    /// Load the journal with every stored entry.
    async fn load_journal(&self, id: JournalId) -> Result<Journal, JournalPersistenceError>;

    /// Reserve a fresh entry identifier.
    async fn next_entry_id(&self) -> Result<EntryId, JournalPersistenceError>;

    /// Persist a newly admitted entry.
    async fn insert_entry(&self, entry: &JournalEntry) -> Result<(), JournalPersistenceError>;

    /// Fetch an entry by identifier.
    async fn find_entry(&self, id: EntryId) -> Result<Option<JournalEntry>, JournalPersistenceError>;

    /// Overwrite the rating and notes of a stored entry.
    ///
    /// Returns whether a row was updated.
    async fn update_entry(&self, entry: &JournalEntry) -> Result<bool, JournalPersistenceError>;

    /// Delete an entry. Returns whether a row was removed.
    async fn delete_entry(&self, id: EntryId) -> Result<bool, JournalPersistenceError>;
}
