//! Shared helpers for journal integration tests.
//!
//! Builds the real services over one in-memory store with a clock the test
//! can move forward a day at a time.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Local, NaiveDate, TimeDelta, TimeZone, Utc};
use gratitude_journal::domain::{JournalService, UserAccountsService};
use gratitude_journal::inbound::http::state::HttpState;
use gratitude_journal::outbound::memory::InMemoryStore;
use mockable::Clock;

/// Clock pinned to a fixed instant until advanced.
#[derive(Debug)]
pub struct SteppingClock {
    now: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Noon UTC on 2024-06-15.
    pub fn midsummer() -> Self {
        Self::at(
            Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
                .single()
                .expect("valid fixture timestamp"),
        )
    }

    pub fn advance_days(&self, days: i64) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += TimeDelta::days(days);
    }

    pub fn today(&self) -> NaiveDate {
        self.local().date_naive()
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Services and the store they share.
pub struct TestBackend {
    pub store: InMemoryStore,
    pub clock: Arc<SteppingClock>,
    pub users: Arc<UserAccountsService<InMemoryStore>>,
    pub journal: Arc<JournalService<InMemoryStore, InMemoryStore>>,
}

impl TestBackend {
    pub fn new() -> Self {
        let store = InMemoryStore::new();
        let shared = Arc::new(store.clone());
        let clock = Arc::new(SteppingClock::midsummer());
        let clock_handle: Arc<dyn Clock> = clock.clone();
        Self {
            store,
            users: Arc::new(UserAccountsService::new(Arc::clone(&shared))),
            journal: Arc::new(JournalService::new(Arc::clone(&shared), shared, clock_handle)),
            clock,
        }
    }

    pub fn http_state(&self) -> HttpState {
        HttpState::new(self.users.clone(), self.journal.clone())
    }
}
