//! URL shortening with per-owner idempotency.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::application::base_url::BaseUrlResolver;
use crate::application::services::code_generator::CodeGenerator;
use crate::domain::entities::{LinkOwner, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Result of a shortening request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedLink {
    pub code: String,
    pub full_short_url: String,
    pub original_url: String,
}

/// Creates short links, reusing the active link of the same `(url, owner)` pair.
///
/// Two different owners (and anonymous vs. authenticated callers) never share a
/// link, so their click counters stay independent.
pub struct ShortenerService<L: LinkRepository + ?Sized, B: BaseUrlResolver + ?Sized> {
    link_repository: Arc<L>,
    code_generator: CodeGenerator<L>,
    base_url: Arc<B>,
}

impl<L: LinkRepository + ?Sized, B: BaseUrlResolver + ?Sized> ShortenerService<L, B> {
    pub fn new(link_repository: Arc<L>, base_url: Arc<B>) -> Self {
        let code_generator = CodeGenerator::new(link_repository.clone());
        Self::with_generator(link_repository, code_generator, base_url)
    }

    pub fn with_generator(
        link_repository: Arc<L>,
        code_generator: CodeGenerator<L>,
        base_url: Arc<B>,
    ) -> Self {
        Self {
            link_repository,
            code_generator,
            base_url,
        }
    }

    /// Shortens `original_url` on behalf of `owner_id` (or anonymously).
    ///
    /// A reused link is reported as `{base}/{code}`; a newly created one as
    /// `{base}/api/r/{code}`. Both forms resolve to the same redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if another request inserted the same code
    /// first, and [`AppError::Internal`] if no free code could be generated or
    /// the store fails.
    #[tracing::instrument(skip(self))]
    pub async fn shorten(
        &self,
        original_url: &str,
        owner_id: Option<Uuid>,
    ) -> Result<ShortenedLink, AppError> {
        let owner = LinkOwner::from_user_id(owner_id);

        if let Some(existing) = self
            .link_repository
            .find_active_by_url_and_owner(original_url, owner)
            .await?
        {
            tracing::debug!(code = %existing.code, "reusing existing short link");
            let full_short_url = format!("{}/{}", self.base_url.base_url(), existing.code);
            return Ok(ShortenedLink {
                code: existing.code,
                full_short_url,
                original_url: existing.original_url,
            });
        }

        let code = self
            .code_generator
            .generate_unique_code()
            .await
            .map_err(|e| {
                AppError::internal(
                    "Could not process shortening due to code-generation failure",
                    json!({ "reason": e.to_string() }),
                )
            })?;

        let new_link = NewLink {
            code,
            original_url: original_url.to_string(),
            owner,
        };

        let link = self
            .link_repository
            .create(new_link)
            .await
            .map_err(|e| match e {
                AppError::Conflict { details, .. } => {
                    tracing::warn!("short code taken by a concurrent request");
                    AppError::conflict("Short code collision, try again", details)
                }
                other => other,
            })?;

        tracing::info!(code = %link.code, link_id = %link.id, "short link created");

        let full_short_url = format!("{}/api/r/{}", self.base_url.base_url(), link.code);
        Ok(ShortenedLink {
            code: link.code,
            full_short_url,
            original_url: link.original_url,
        })
    }
}
