//! Repository trait for user accounts.

use crate::domain::entities::{NewUser, User, UserCredentials};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user accounts.
///
/// Password hashes are only readable through [`UserRepository::find_credentials_by_email`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds an active user by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Reads id, email and password hash of an active user.
    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, AppError>;

    /// Lists active users, newest first.
    async fn list(&self, limit: i64) -> Result<Vec<User>, AppError>;
}
