//! User account service implementing [`UserAccounts`].
//!
//! Every operation validates its names before reaching storage, so invalid
//! input never costs a round trip.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{CreateUserRequest, UpdateUserRequest, UserAccounts, UserRepository};
use crate::domain::{Error, JournalError, NewUser, PersonName, ProfileUpdate, User, UserName};

/// User account service backed by a [`UserRepository`].
#[derive(Clone)]
pub struct UserAccountsService<R> {
    users: Arc<R>,
}

impl<R> UserAccountsService<R> {
    /// Create a new service over the given repository.
    pub const fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

impl<R> UserAccountsService<R>
where
    R: UserRepository,
{
    fn parse_user_name(raw: &str) -> Result<UserName, JournalError> {
        Ok(UserName::new(raw)?)
    }

    fn parse_profile(request: UpdateUserRequest) -> Result<ProfileUpdate, JournalError> {
        Ok(ProfileUpdate {
            first_name: PersonName::from_optional(request.first_name)?,
            last_name: PersonName::from_optional(request.last_name)?,
        })
    }

    fn parse_new_user(request: CreateUserRequest) -> Result<NewUser, JournalError> {
        Ok(NewUser {
            user_name: UserName::from_optional(request.user_name)?,
            first_name: PersonName::from_optional(request.first_name)?,
            last_name: PersonName::from_optional(request.last_name)?,
        })
    }

    async fn require_user(&self, user_name: &UserName) -> Result<User, JournalError> {
        self.users
            .find_by_user_name(user_name)
            .await?
            .ok_or_else(|| JournalError::user_not_found(user_name.as_str()))
    }

    async fn create(&self, request: CreateUserRequest) -> Result<User, JournalError> {
        let new_user = Self::parse_new_user(request)?;
        if self.users.find_by_user_name(&new_user.user_name).await?.is_some() {
            return Err(JournalError::UserNameTaken {
                user_name: new_user.user_name.into(),
            });
        }

        let user = self.users.insert(&new_user).await?;
        info!(user_name = %user.user_name(), user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn update(
        &self,
        user_name: &str,
        request: UpdateUserRequest,
    ) -> Result<User, JournalError> {
        let user_name = Self::parse_user_name(user_name)?;
        let update = Self::parse_profile(request)?;
        let user = self.require_user(&user_name).await?;

        let updated = self
            .users
            .update_profile(user.id(), &update)
            .await?
            .ok_or_else(|| JournalError::user_not_found(user_name.as_str()))?;
        info!(user_name = %user_name, "user profile updated");
        Ok(updated)
    }

    async fn delete(&self, user_name: &str) -> Result<(), JournalError> {
        let user_name = Self::parse_user_name(user_name)?;
        let user = self.require_user(&user_name).await?;
        if !self.users.delete(user.id()).await? {
            return Err(JournalError::user_not_found(user_name.as_str()));
        }
        info!(user_name = %user_name, "user deleted with journal");
        Ok(())
    }
}

#[async_trait]
impl<R> UserAccounts for UserAccountsService<R>
where
    R: UserRepository,
{
    async fn get_user(&self, user_name: &str) -> Result<User, Error> {
        let user_name = Self::parse_user_name(user_name)?;
        Ok(self.require_user(&user_name).await?)
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error> {
        Ok(self.create(request).await?)
    }

    async fn update_user(
        &self,
        user_name: &str,
        request: UpdateUserRequest,
    ) -> Result<User, Error> {
        Ok(self.update(user_name, request).await?)
    }

    async fn delete_user(&self, user_name: &str) -> Result<(), Error> {
        Ok(self.delete(user_name).await?)
    }
}
