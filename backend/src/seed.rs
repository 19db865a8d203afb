//! Optional demo user seeding at startup.
//!
//! Creates three fixed users through the [`UserAccounts`] port. Users that
//! already exist are skipped, so repeated startups leave the store unchanged.

use thiserror::Error;
use tracing::info;

use crate::domain::ports::{CreateUserRequest, UserAccounts};
use crate::domain::{Error, ErrorCode};

/// A user created by demo seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoUser {
    pub user_name: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
}

/// The demo users, in creation order.
pub const DEMO_USERS: [DemoUser; 3] = [
    DemoUser {
        user_name: "test1UserName",
        first_name: "test1FirstName",
        last_name: "test1LastName",
    },
    DemoUser {
        user_name: "test2UserName",
        first_name: "test2FirstName",
        last_name: "test2LastName",
    },
    DemoUser {
        user_name: "test3UserName",
        first_name: "test3FirstName",
        last_name: "test3LastName",
    },
];

/// Counts reported after a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub created: usize,
    pub skipped: usize,
}

/// Seeding stopped at a user the store refused.
#[derive(Debug, Error)]
#[error("failed to seed demo user {user_name}: {source}")]
pub struct DemoSeedingError {
    user_name: &'static str,
    #[source]
    source: Error,
}

impl DemoSeedingError {
    /// Name of the user that failed.
    pub fn user_name(&self) -> &str {
        self.user_name
    }
}

/// Create the demo users when `enabled`.
///
/// Returns `None` when seeding is disabled.
///
/// # Errors
/// Returns [`DemoSeedingError`] on the first failure other than an existing
/// user.
pub async fn seed_demo_users_on_startup(
    enabled: bool,
    accounts: &dyn UserAccounts,
) -> Result<Option<SeedOutcome>, DemoSeedingError> {
    if !enabled {
        info!(reason = "disabled", "demo user seeding skipped");
        return Ok(None);
    }

    let mut outcome = SeedOutcome::default();
    for demo in DEMO_USERS {
        let request = CreateUserRequest {
            user_name: Some(demo.user_name.to_owned()),
            first_name: Some(demo.first_name.to_owned()),
            last_name: Some(demo.last_name.to_owned()),
        };
        match accounts.create_user(request).await {
            Ok(user) => {
                info!(user_name = demo.user_name, user_id = %user.id(), "demo user created");
                outcome.created += 1;
            }
            Err(err) if err.code() == ErrorCode::Conflict => {
                info!(user_name = demo.user_name, "demo user already present; skipping");
                outcome.skipped += 1;
            }
            Err(source) => {
                return Err(DemoSeedingError {
                    user_name: demo.user_name,
                    source,
                });
            }
        }
    }

    info!(
        created = outcome.created,
        skipped = outcome.skipped,
        "demo user seeding finished"
    );
    Ok(Some(outcome))
}
