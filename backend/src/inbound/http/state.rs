//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the driving
//! ports, so they can be exercised with any storage behind them.

use std::sync::Arc;

use crate::domain::ports::{JournalEntries, UserAccounts};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User account use cases.
    pub users: Arc<dyn UserAccounts>,
    /// Journal entry use cases.
    pub journal: Arc<dyn JournalEntries>,
}

impl HttpState {
    /// Bundle the driving ports.
    pub fn new(users: Arc<dyn UserAccounts>, journal: Arc<dyn JournalEntries>) -> Self {
        Self { users, journal }
    }
}
