//! Driving port for user account management.
//!
//! Inputs arrive unvalidated; implementations apply the naming rules before
//! touching storage. Absent names are treated as invalid.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Raw input for creating a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUserRequest {
    /// Requested unique user name.
    pub user_name: Option<String>,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
}

/// Raw input for replacing the mutable profile fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserRequest {
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
}

/// Domain use-case port for user CRUD.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAccounts: Send + Sync {
    /// Look a user up by user name.
    async fn get_user(&self, user_name: &str) -> Result<User, Error>;

    /// Create a user and its journal.
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error>;

    /// Replace first and last name of an existing user.
    async fn update_user(&self, user_name: &str, request: UpdateUserRequest)
    -> Result<User, Error>;

    /// Delete a user together with its journal.
    async fn delete_user(&self, user_name: &str) -> Result<(), Error>;
}
