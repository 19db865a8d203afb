//! PostgreSQL-backed [`UserRepository`].
//!
//! Users and journals live in separate tables with a one-to-one foreign key.
//! Inserting a user creates its journal in the same transaction; deleting a
//! user removes entries, journal and user row together.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::warn;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{JournalId, NewUser, PersonName, ProfileUpdate, User, UserId, UserName};

use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{NewJournalRow, NewUserRow, ProfileChangeset, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{journal_entries, journals, users};

const USER_NAME_CONSTRAINT: &str = "users_user_name_key";

/// Diesel implementation of [`UserRepository`].
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a repository over `pool`.
    ///
    /// ```rust,no_run
    /// use gratitude_journal::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/journal")).await?;
    /// let users = DieselUserRepository::new(pool);
    /// # let _ = users;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_basic_pool_error(error, |message| UserPersistenceError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_basic_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

fn map_insert_error(error: diesel::result::Error, user_name: &UserName) -> UserPersistenceError {
    if is_unique_violation(&error, USER_NAME_CONSTRAINT) {
        return UserPersistenceError::user_name_taken(user_name.as_str());
    }
    map_diesel_error(error)
}

/// Convert a stored row into a domain user, re-checking the naming rules.
fn row_to_user(row: UserRow, journal_id: i64) -> Result<User, UserPersistenceError> {
    let names = UserName::new(row.user_name).and_then(|user_name| {
        Ok((
            user_name,
            PersonName::new(row.first_name)?,
            PersonName::new(row.last_name)?,
        ))
    });
    let (user_name, first_name, last_name) = names.map_err(|err| {
        warn!(user_id = row.id, error = %err, "stored user violates naming rules");
        UserPersistenceError::query("stored user failed validation")
    })?;

    Ok(User::new(
        UserId::new(row.id),
        JournalId::new(journal_id),
        user_name,
        first_name,
        last_name,
    ))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_user_name(
        &self,
        user_name: &UserName,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let found = users::table
            .inner_join(journals::table)
            .filter(users::user_name.eq(user_name.as_str()))
            .select((UserRow::as_select(), journals::id))
            .first::<(UserRow, i64)>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        found
            .map(|(row, journal_id)| row_to_user(row, journal_id))
            .transpose()
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let new_row = NewUserRow {
            user_name: user.user_name.as_str(),
            first_name: user.first_name.as_str(),
            last_name: user.last_name.as_str(),
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let (row, journal_id) = conn
            .transaction(|conn| {
                async move {
                    let row = diesel::insert_into(users::table)
                        .values(&new_row)
                        .returning(UserRow::as_returning())
                        .get_result::<UserRow>(conn)
                        .await?;
                    let journal_id = diesel::insert_into(journals::table)
                        .values(NewJournalRow { user_id: row.id })
                        .returning(journals::id)
                        .get_result::<i64>(conn)
                        .await?;
                    Ok::<_, diesel::result::Error>((row, journal_id))
                }
                .scope_boxed()
            })
            .await
            .map_err(|err| map_insert_error(err, &user.user_name))?;

        row_to_user(row, journal_id)
    }

    async fn update_profile(
        &self,
        id: UserId,
        update: &ProfileUpdate,
    ) -> Result<Option<User>, UserPersistenceError> {
        let changeset = ProfileChangeset {
            first_name: update.first_name.as_str(),
            last_name: update.last_name.as_str(),
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = conn
            .transaction(|conn| {
                async move {
                    let Some(row) = diesel::update(users::table.find(id.get()))
                        .set(&changeset)
                        .returning(UserRow::as_returning())
                        .get_result::<UserRow>(conn)
                        .await
                        .optional()?
                    else {
                        return Ok(None);
                    };
                    let journal_id = journals::table
                        .filter(journals::user_id.eq(row.id))
                        .select(journals::id)
                        .first::<i64>(conn)
                        .await?;
                    Ok::<_, diesel::result::Error>(Some((row, journal_id)))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        updated
            .map(|(row, journal_id)| row_to_user(row, journal_id))
            .transpose()
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction(|conn| {
            async move {
                let owned_journals = journals::table
                    .filter(journals::user_id.eq(id.get()))
                    .select(journals::id);
                diesel::delete(
                    journal_entries::table.filter(journal_entries::journal_id.eq_any(owned_journals)),
                )
                .execute(conn)
                .await?;
                diesel::delete(journals::table.filter(journals::user_id.eq(id.get())))
                    .execute(conn)
                    .await?;
                let removed = diesel::delete(users::table.find(id.get()))
                    .execute(conn)
                    .await?;
                Ok::<_, diesel::result::Error>(removed > 0)
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}
