//! Business failures raised by the user and journal services.
//!
//! Each variant maps to exactly one [`ErrorCode`]; the `details.code` field of
//! the resulting [`Error`] names the variant for clients.

use chrono::NaiveDate;
use serde_json::json;
use tracing::warn;

use super::error::{Error, ErrorCode};
use super::journal::AdmissionError;
use super::journal_entry::EntryId;
use super::names::InvalidName;
use super::ports::{JournalPersistenceError, UserPersistenceError};

/// Failures surfaced by the user and journal use cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JournalError {
    /// A user, first or last name broke the naming rules.
    #[error(transparent)]
    InvalidName(#[from] InvalidName),
    /// No user has the given name.
    #[error("Could not find the user \"{user_name}\"")]
    UserNotFound {
        /// The name looked up.
        user_name: String,
    },
    /// The user name is already in use.
    #[error("The userName \"{user_name}\" is already taken.")]
    UserNameTaken {
        /// The contested name.
        user_name: String,
    },
    /// No entry has the given identifier.
    #[error("No entry exists for journalEntryId {entry_id}")]
    EntryNotFound {
        /// The identifier looked up.
        entry_id: EntryId,
    },
    /// The journal already holds an entry for the date.
    #[error("An entry already exists for {date}")]
    EntryAlreadyExists {
        /// The contested date.
        date: NaiveDate,
    },
    /// The entry was not dated today.
    #[error("Entry is not from today.")]
    EntryNotFromToday {
        /// The date carried by the entry.
        date: NaiveDate,
    },
    /// User storage failed.
    #[error(transparent)]
    UserPersistence(#[from] UserPersistenceError),
    /// Journal storage failed.
    #[error(transparent)]
    JournalPersistence(#[from] JournalPersistenceError),
}

impl JournalError {
    /// Build a [`JournalError::UserNotFound`].
    pub fn user_not_found(user_name: impl Into<String>) -> Self {
        Self::UserNotFound {
            user_name: user_name.into(),
        }
    }

    /// Build a [`JournalError::EntryNotFound`].
    #[must_use]
    pub const fn entry_not_found(entry_id: EntryId) -> Self {
        Self::EntryNotFound { entry_id }
    }

    /// Error code the failure maps to.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidName(_) | Self::EntryNotFromToday { .. } => ErrorCode::InvalidRequest,
            Self::UserNotFound { .. } | Self::EntryNotFound { .. } => ErrorCode::NotFound,
            Self::UserNameTaken { .. } | Self::EntryAlreadyExists { .. } => ErrorCode::Conflict,
            Self::UserPersistence(UserPersistenceError::Connection { .. })
            | Self::JournalPersistence(JournalPersistenceError::Connection { .. }) => {
                ErrorCode::ServiceUnavailable
            }
            Self::UserPersistence(UserPersistenceError::UserNameTaken { .. }) => {
                ErrorCode::Conflict
            }
            Self::UserPersistence(UserPersistenceError::Query { .. })
            | Self::JournalPersistence(JournalPersistenceError::Query { .. }) => {
                ErrorCode::InternalError
            }
        }
    }
}

impl From<AdmissionError> for JournalError {
    fn from(value: AdmissionError) -> Self {
        match value {
            AdmissionError::NotFromToday { date, .. } => Self::EntryNotFromToday { date },
            AdmissionError::AlreadyExists { date } => Self::EntryAlreadyExists { date },
        }
    }
}

impl From<JournalError> for Error {
    fn from(value: JournalError) -> Self {
        let code = value.code();
        match value {
            JournalError::InvalidName(ref invalid) => Error::new(code, value.to_string())
                .with_details(json!({ "code": "invalid_name", "name": invalid.name() })),
            JournalError::UserNotFound { ref user_name } => Error::new(code, value.to_string())
                .with_details(json!({ "code": "user_not_found", "userName": user_name })),
            JournalError::UserNameTaken { ref user_name }
            | JournalError::UserPersistence(UserPersistenceError::UserNameTaken {
                ref user_name,
            }) => Error::new(code, format!("The userName \"{user_name}\" is already taken."))
                .with_details(json!({ "code": "user_name_taken", "userName": user_name })),
            JournalError::EntryNotFound { entry_id } => Error::new(code, value.to_string())
                .with_details(json!({ "code": "entry_not_found", "journalEntryId": entry_id })),
            JournalError::EntryAlreadyExists { date } => Error::new(code, value.to_string())
                .with_details(json!({ "code": "entry_already_exists", "date": date })),
            JournalError::EntryNotFromToday { date } => Error::new(code, value.to_string())
                .with_details(json!({ "code": "entry_not_from_today", "date": date })),
            JournalError::UserPersistence(ref source) => {
                warn!(error = %source, "user persistence failure");
                persistence_error(code, "user repository")
            }
            JournalError::JournalPersistence(ref source) => {
                warn!(error = %source, "journal persistence failure");
                persistence_error(code, "journal repository")
            }
        }
    }
}

fn persistence_error(code: ErrorCode, adapter: &str) -> Error {
    match code {
        ErrorCode::ServiceUnavailable => Error::new(code, format!("{adapter} unavailable")),
        _ => Error::new(code, format!("{adapter} error")),
    }
}
