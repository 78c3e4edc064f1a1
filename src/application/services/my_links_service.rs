//! Owner-scoped management of shortened links.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: i64 = 100;

/// One page of a user's active links, newest first.
#[derive(Debug, Clone)]
pub struct LinkPage {
    pub items: Vec<Link>,
    pub total_items: i64,
    pub total_pages: i64,
    pub page: i64,
    pub page_size: i64,
}

/// Lists, updates and soft-deletes the links of a single owner.
///
/// Update and delete always check existence before ownership, so a missing
/// link is reported as `NotFound` and someone else's link as `Forbidden`.
/// Anonymous links have no owner and are therefore `Forbidden` for everyone.
pub struct MyLinksService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> MyLinksService<L> {
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Returns page `page` (1-based) of `owner_id`'s active links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `page < 1`, `page_size` is outside `1..=100`
    /// or the resulting offset does not fit in an `i64`.
    #[tracing::instrument(skip(self))]
    pub async fn list_paged(
        &self,
        owner_id: Uuid,
        page: i64,
        page_size: i64,
    ) -> Result<LinkPage, AppError> {
        if page < 1 {
            return Err(AppError::bad_request(
                "Page must be at least 1",
                json!({ "page": page }),
            ));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(AppError::bad_request(
                format!("Page size must be between 1 and {MAX_PAGE_SIZE}"),
                json!({ "page_size": page_size }),
            ));
        }

        let offset = (page - 1).checked_mul(page_size).ok_or_else(|| {
            AppError::bad_request("Page is out of range", json!({ "page": page }))
        })?;

        let items = self
            .link_repository
            .list_active_by_owner(owner_id, offset, page_size)
            .await?;
        let total_items = self.link_repository.count_active_by_owner(owner_id).await?;

        Ok(LinkPage {
            items,
            total_items,
            total_pages: total_pages(total_items, page_size),
            page,
            page_size,
        })
    }

    /// Replaces the original URL of a link owned by `requester_id`.
    ///
    /// Code and click count are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active link has `link_id`,
    /// [`AppError::Forbidden`] if it belongs to someone else and
    /// [`AppError::Internal`] if the update fails.
    #[tracing::instrument(skip(self))]
    pub async fn update_link(
        &self,
        link_id: Uuid,
        requester_id: Uuid,
        new_original_url: &str,
    ) -> Result<Link, AppError> {
        self.find_owned(link_id, requester_id).await?;

        let link = self
            .link_repository
            .update_original_url(link_id, new_original_url)
            .await?;

        tracing::info!(code = %link.code, "link updated");
        Ok(link)
    }

    /// Soft-deletes a link owned by `requester_id`.
    ///
    /// The row is kept with `deleted_at` set.
    ///
    /// # Errors
    ///
    /// Same as [`Self::update_link`].
    #[tracing::instrument(skip(self))]
    pub async fn delete_link(&self, link_id: Uuid, requester_id: Uuid) -> Result<(), AppError> {
        let link = self.find_owned(link_id, requester_id).await?;

        if !self.link_repository.soft_delete(link_id).await? {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "id": link_id }),
            ));
        }

        tracing::info!(code = %link.code, "link soft-deleted");
        Ok(())
    }

    async fn find_owned(&self, link_id: Uuid, requester_id: Uuid) -> Result<Link, AppError> {
        let link = self
            .link_repository
            .find_active_by_id(link_id)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": link_id })))?;

        if !link.is_owned_by(requester_id) {
            tracing::warn!(owner = ?link.owner_id, "ownership check failed");
            return Err(AppError::forbidden(
                "You do not have permission to modify this link",
                json!({ "id": link_id }),
            ));
        }

        Ok(link)
    }
}

fn total_pages(total_items: i64, page_size: i64) -> i64 {
    (total_items + page_size - 1) / page_size
}
