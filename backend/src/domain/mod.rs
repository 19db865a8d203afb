//! Domain primitives, aggregates and services.
//!
//! Purpose: define the strongly typed entities of the gratitude journal and
//! the use cases exposed through the driving ports. Types here are transport
//! and storage agnostic; adapters translate at the edges.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic error payload.
//! - `User`, `Journal`, `JournalEntry`: the aggregates.
//! - `UserAccountsService`, `JournalService`: driving port implementations.

pub mod error;
pub mod failure;
pub mod journal;
pub mod journal_entry;
pub mod journal_service;
pub mod names;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::failure::JournalError;
pub use self::journal::{AdmissionError, Journal};
pub use self::journal_entry::{
    EntryContent, EntryId, EntrySummary, GratitudeNotes, JournalEntry, JournalId,
    NewJournalEntry, UnknownWellBeing, WellBeing,
};
pub use self::journal_service::JournalService;
pub use self::names::{InvalidName, NAME_MIN_LENGTH, PersonName, UserName, is_valid_name};
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, ProfileUpdate, User, UserId};
pub use self::user_service::UserAccountsService;
