//! Short code resolution and click counting.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::short_code::validate_code_format;

/// Resolves short codes to their original URLs.
///
/// Lookup is by code only. Soft-deleted links keep resolving; deleting a link
/// only hides it from its owner's listing.
pub struct RedirectService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> RedirectService<L> {
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Returns the original URL for `code` and counts one click.
    ///
    /// The increment completes before the URL is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `code` is not exactly 6 characters
    /// (the store is not queried), [`AppError::NotFound`] for an unknown code and
    /// [`AppError::Internal`] if the lookup or the increment fails.
    #[tracing::instrument(skip(self))]
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        validate_code_format(code)?;

        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        if link.is_deleted() {
            tracing::info!(link_id = %link.id, "resolving soft-deleted link");
        }

        self.link_repository.increment_clicks(link.id).await?;

        tracing::debug!(link_id = %link.id, "click recorded");
        Ok(link.original_url)
    }
}
