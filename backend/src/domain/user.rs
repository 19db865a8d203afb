//! User data model.
//!
//! A user is identified internally by a storage-assigned [`UserId`] and
//! externally by its immutable [`UserName`]. Every user owns exactly one
//! journal, created alongside the user.

use std::fmt;

use super::journal_entry::JournalId;
use super::names::{PersonName, UserName};

/// Storage-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Application user.
///
/// ## Invariants
/// - `user_name`, `first_name` and `last_name` satisfy the naming rules.
/// - `journal_id` refers to the journal created with the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    journal_id: JournalId,
    user_name: UserName,
    first_name: PersonName,
    last_name: PersonName,
}

impl User {
    /// Assemble a user from persisted parts.
    #[must_use]
    pub const fn new(
        id: UserId,
        journal_id: JournalId,
        user_name: UserName,
        first_name: PersonName,
        last_name: PersonName,
    ) -> Self {
        Self {
            id,
            journal_id,
            user_name,
            first_name,
            last_name,
        }
    }

    /// Storage-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Identifier of the journal owned by this user.
    #[must_use]
    pub const fn journal_id(&self) -> JournalId {
        self.journal_id
    }

    /// Unique user name.
    #[must_use]
    pub const fn user_name(&self) -> &UserName {
        &self.user_name
    }

    /// First name.
    #[must_use]
    pub const fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    /// Last name.
    #[must_use]
    pub const fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    /// Apply a profile update, leaving identity untouched.
    #[must_use]
    pub fn with_profile(self, update: ProfileUpdate) -> Self {
        Self {
            first_name: update.first_name,
            last_name: update.last_name,
            ..self
        }
    }
}

/// Validated input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Requested unique user name.
    pub user_name: UserName,
    /// First name.
    pub first_name: PersonName,
    /// Last name.
    pub last_name: PersonName,
}

/// Validated replacement values for the mutable profile fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    /// New first name.
    pub first_name: PersonName,
    /// New last name.
    pub last_name: PersonName,
}
