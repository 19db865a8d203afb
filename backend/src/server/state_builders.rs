//! Builders wiring domain services to a storage backend.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::info;

use gratitude_journal::domain::ports::{JournalRepository, UserRepository};
use gratitude_journal::domain::{JournalService, UserAccountsService};
use gratitude_journal::inbound::http::state::HttpState;
use gratitude_journal::outbound::memory::InMemoryStore;
use gratitude_journal::outbound::persistence::{DieselJournalRepository, DieselUserRepository};

use super::ServerConfig;

fn build_services<U, J>(users: Arc<U>, journals: Arc<J>, clock: Arc<dyn Clock>) -> HttpState
where
    U: UserRepository + 'static,
    J: JournalRepository + 'static,
{
    HttpState::new(
        Arc::new(UserAccountsService::new(Arc::clone(&users))),
        Arc::new(JournalService::new(users, journals, clock)),
    )
}

/// Build the HTTP state: Diesel repositories when a pool is configured,
/// otherwise one shared in-memory store.
pub fn build_http_state(config: &ServerConfig) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    match &config.db_pool {
        Some(pool) => {
            info!(storage = "postgres", "journal storage configured");
            build_services(
                Arc::new(DieselUserRepository::new(pool.clone())),
                Arc::new(DieselJournalRepository::new(pool.clone())),
                clock,
            )
        }
        None => {
            info!(storage = "memory", "no database configured; data is not persisted");
            let store = Arc::new(InMemoryStore::new());
            build_services(Arc::clone(&store), store, clock)
        }
    }
}
