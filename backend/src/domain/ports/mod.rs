//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod journal_entries;
mod journal_repository;
mod user_accounts;
mod user_repository;

#[cfg(test)]
pub use journal_entries::MockJournalEntries;
pub use journal_entries::JournalEntries;
#[cfg(test)]
pub use journal_repository::MockJournalRepository;
pub use journal_repository::{JournalPersistenceError, JournalRepository};
#[cfg(test)]
pub use user_accounts::MockUserAccounts;
pub use user_accounts::{CreateUserRequest, UpdateUserRequest, UserAccounts};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
