//! Journal aggregate enforcing the one-entry-per-day rule.
//!
//! Entries are indexed by `(date, id)` so the "already written today" check
//! is a range lookup instead of a scan, while listings still see every stored
//! entry even if storage holds more than one for a date.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::journal_entry::{EntryId, EntrySummary, JournalEntry, JournalId, NewJournalEntry};

/// Reasons a new entry may be refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdmissionError {
    /// The entry is dated other than today.
    #[error("Entry is not from today.")]
    NotFromToday {
        /// Date carried by the rejected entry.
        date: NaiveDate,
        /// The current date.
        today: NaiveDate,
    },
    /// The journal already holds an entry for today.
    #[error("An entry already exists for {date}")]
    AlreadyExists {
        /// The contested date.
        date: NaiveDate,
    },
}

/// A user's journal and its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    id: JournalId,
    entries: BTreeMap<(NaiveDate, EntryId), JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    #[must_use]
    pub const fn new(id: JournalId) -> Self {
        Self {
            id,
            entries: BTreeMap::new(),
        }
    }

    /// Rebuild a journal from stored entries.
    ///
    /// Entries owned by another journal are ignored.
    #[must_use]
    pub fn from_entries(id: JournalId, entries: impl IntoIterator<Item = JournalEntry>) -> Self {
        let entries = entries
            .into_iter()
            .filter(|entry| entry.journal_id() == id)
            .map(|entry| ((entry.date(), entry.id()), entry))
            .collect();
        Self { id, entries }
    }

    /// Journal identifier.
    #[must_use]
    pub const fn id(&self) -> JournalId {
        self.id
    }

    /// Number of entries held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any entry is dated `date`.
    #[must_use]
    pub fn has_entry_on(&self, date: NaiveDate) -> bool {
        self.entries
            .range((date, EntryId::new(i64::MIN))..=(date, EntryId::new(i64::MAX)))
            .next()
            .is_some()
    }

    /// Admit `draft` under `id`.
    ///
    /// The draft must be dated `today` and the journal must not already hold
    /// an entry for `today`. On success the entry is bound to this journal.
    ///
    /// # Errors
    /// Returns [`AdmissionError`] when either condition fails; the journal
    /// is left unchanged.
    pub fn add_entry(
        &mut self,
        id: EntryId,
        draft: NewJournalEntry,
        today: NaiveDate,
    ) -> Result<&JournalEntry, AdmissionError> {
        let NewJournalEntry { date, content } = draft;
        if date != today {
            return Err(AdmissionError::NotFromToday { date, today });
        }
        if self.has_entry_on(today) {
            return Err(AdmissionError::AlreadyExists { date: today });
        }

        let entry = JournalEntry::new(id, self.id, date, content);
        Ok(self.entries.entry((date, id)).or_insert(entry))
    }

    /// Every entry as an `{id, date}` pair, newest date first.
    #[must_use]
    pub fn summaries(&self) -> Vec<EntrySummary> {
        self.entries.values().rev().map(JournalEntry::summary).collect()
    }
}
