//! Driving port for reading and writing journal entries.

use async_trait::async_trait;

use crate::domain::{EntryContent, EntryId, EntrySummary, Error, JournalEntry};

/// Domain use-case port for journal entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JournalEntries: Send + Sync {
    /// List `{id, date}` pairs of a user's journal, newest first.
    async fn list_entries(&self, user_name: &str) -> Result<Vec<EntrySummary>, Error>;

    /// Add today's entry to a user's journal.
    async fn add_entry(&self, user_name: &str, content: EntryContent) -> Result<JournalEntry, Error>;

    /// Fetch a single entry.
    async fn get_entry(&self, id: EntryId) -> Result<JournalEntry, Error>;

    /// Replace the rating and notes of an entry.
    async fn update_entry(&self, id: EntryId, content: EntryContent) -> Result<JournalEntry, Error>;

    /// Delete an entry.
    async fn delete_entry(&self, id: EntryId) -> Result<(), Error>;
}
