//! PostgreSQL persistence adapters built on Diesel.
//!
//! Implements the user and journal driven ports over a `diesel-async` bb8
//! pool. Row structs stay private to this module; repositories convert to
//! domain types and map every driver failure onto the port error enums.

mod diesel_basic_error_mapping;
mod diesel_journal_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_journal_repository::DieselJournalRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
