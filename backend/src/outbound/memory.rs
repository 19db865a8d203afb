//! In-process storage adapter.
//!
//! Backs both driven ports with one shared map-based state so the server can
//! run without a database and tests can exercise real services. Identifiers
//! are allocated from per-kind counters starting at 1.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    JournalPersistenceError, JournalRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{
    EntryId, Journal, JournalEntry, JournalId, NewUser, ProfileUpdate, User, UserId, UserName,
};

#[derive(Debug, Default)]
struct StoreState {
    last_user_id: i64,
    last_journal_id: i64,
    last_entry_id: i64,
    users: BTreeMap<UserId, User>,
    entries: BTreeMap<EntryId, JournalEntry>,
}

impl StoreState {
    fn user_by_name(&self, user_name: &UserName) -> Option<&User> {
        self.users
            .values()
            .find(|user| user.user_name() == user_name)
    }
}

/// Shared in-memory store implementing [`UserRepository`] and
/// [`JournalRepository`].
///
/// Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
}

const POISONED: &str = "in-memory store lock poisoned";

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_users(&self) -> Result<MutexGuard<'_, StoreState>, UserPersistenceError> {
        self.state
            .lock()
            .map_err(|_| UserPersistenceError::query(POISONED))
    }

    fn lock_journals(&self) -> Result<MutexGuard<'_, StoreState>, JournalPersistenceError> {
        self.state
            .lock()
            .map_err(|_| JournalPersistenceError::query(POISONED))
    }

    /// Number of stored entries across all journals.
    ///
    /// # Errors
    /// Returns [`JournalPersistenceError::Query`] if the state lock is poisoned.
    pub fn entry_count(&self) -> Result<usize, JournalPersistenceError> {
        Ok(self.lock_journals()?.entries.len())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_user_name(
        &self,
        user_name: &UserName,
    ) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock_users()?.user_by_name(user_name).cloned())
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut state = self.lock_users()?;
        if state.user_by_name(&user.user_name).is_some() {
            return Err(UserPersistenceError::user_name_taken(
                user.user_name.as_str(),
            ));
        }

        state.last_user_id += 1;
        state.last_journal_id += 1;
        let stored = User::new(
            UserId::new(state.last_user_id),
            JournalId::new(state.last_journal_id),
            user.user_name.clone(),
            user.first_name.clone(),
            user.last_name.clone(),
        );
        state.users.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn update_profile(
        &self,
        id: UserId,
        update: &ProfileUpdate,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut state = self.lock_users()?;
        let Some(current) = state.users.remove(&id) else {
            return Ok(None);
        };
        let updated = current.with_profile(update.clone());
        state.users.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut state = self.lock_users()?;
        let Some(user) = state.users.remove(&id) else {
            return Ok(false);
        };
        let journal_id = user.journal_id();
        state
            .entries
            .retain(|_, entry| entry.journal_id() != journal_id);
        Ok(true)
    }
}

#[async_trait]
impl JournalRepository for InMemoryStore {
    async fn load_journal(&self, id: JournalId) -> Result<Journal, JournalPersistenceError> {
        let state = self.lock_journals()?;
        Ok(Journal::from_entries(
            id,
            state
                .entries
                .values()
                .filter(|entry| entry.journal_id() == id)
                .cloned(),
        ))
    }

    async fn next_entry_id(&self) -> Result<EntryId, JournalPersistenceError> {
        let mut state = self.lock_journals()?;
        state.last_entry_id += 1;
        Ok(EntryId::new(state.last_entry_id))
    }

    async fn insert_entry(&self, entry: &JournalEntry) -> Result<(), JournalPersistenceError> {
        let mut state = self.lock_journals()?;
        if state.entries.contains_key(&entry.id()) {
            return Err(JournalPersistenceError::query(format!(
                "duplicate journal entry id {}",
                entry.id()
            )));
        }
        state.entries.insert(entry.id(), entry.clone());
        Ok(())
    }

    async fn find_entry(&self, id: EntryId) -> Result<Option<JournalEntry>, JournalPersistenceError> {
        Ok(self.lock_journals()?.entries.get(&id).cloned())
    }

    async fn update_entry(&self, entry: &JournalEntry) -> Result<bool, JournalPersistenceError> {
        let mut state = self.lock_journals()?;
        match state.entries.get_mut(&entry.id()) {
            Some(stored) => {
                *stored = stored.clone().with_content(entry.content().clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_entry(&self, id: EntryId) -> Result<bool, JournalPersistenceError> {
        Ok(self.lock_journals()?.entries.remove(&id).is_some())
    }
}
