//! Repository trait for short link data access.

use crate::domain::entities::{Link, LinkOwner, NewLink};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for shortened links.
///
/// "Active" means `deleted_at IS NULL`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new link with zero clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is already taken (by any
    /// row, deleted or not).
    ///
    /// Returns [`AppError::Internal`] on any other database error.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Returns true if any row, soft-deleted or not, uses `code`.
    async fn code_exists(&self, code: &str) -> Result<bool, AppError>;

    /// Finds a link by short code without filtering on `deleted_at`.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds the active link for an exact `(original_url, owner)` pair.
    ///
    /// `LinkOwner::Anonymous` matches only rows without an owner.
    async fn find_active_by_url_and_owner(
        &self,
        original_url: &str,
        owner: LinkOwner,
    ) -> Result<Option<Link>, AppError>;

    /// Finds an active link by id.
    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Link>, AppError>;

    /// Lists active links of `owner_id`, newest first.
    async fn list_active_by_owner(
        &self,
        owner_id: Uuid,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Link>, AppError>;

    /// Counts active links of `owner_id`.
    async fn count_active_by_owner(&self, owner_id: Uuid) -> Result<i64, AppError>;

    /// Replaces the original URL of an active link. Code and clicks are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active link has this id.
    async fn update_original_url(&self, id: Uuid, original_url: &str) -> Result<Link, AppError>;

    /// Soft-deletes a link by setting `deleted_at = now()`.
    ///
    /// Returns `Ok(false)` if the link was not found or already deleted.
    async fn soft_delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Atomically adds one to the click counter.
    async fn increment_clicks(&self, id: Uuid) -> Result<(), AppError>;
}
