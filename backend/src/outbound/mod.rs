//! Outbound adapters implementing the driven ports.
//!
//! - **memory**: shared in-process store used when no database is configured
//!   and by the integration tests.
//! - **persistence**: PostgreSQL repositories built on Diesel.
//!
//! Adapters translate between domain types and storage representations and
//! hold no business rules.

pub mod memory;
pub mod persistence;
