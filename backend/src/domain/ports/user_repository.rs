//! Port abstraction for user persistence adapters and their errors.
//!
//! Adapters own the user-to-journal relationship: inserting a user also
//! creates its journal, and deleting a user removes the journal and every
//! entry in it.
use async_trait::async_trait;

use crate::domain::{NewUser, ProfileUpdate, User, UserId, UserName};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The unique user name index rejected an insert.
        UserNameTaken { user_name: String } => "user name already stored: {user_name}",
    }
}

/// Driven port for storing users and their journals.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by its unique user name.
    async fn find_by_user_name(
        &self,
        user_name: &UserName,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a user together with a fresh, empty journal.
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Replace the mutable profile fields; `None` when the user is gone.
    async fn update_profile(
        &self,
        id: UserId,
        update: &ProfileUpdate,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Delete the user, its journal and all journal entries.
    ///
    /// Returns whether a user row was removed.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}
