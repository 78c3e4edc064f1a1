//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::ShortenedLink;
use crate::utils::url_validator::validate_original_url;

/// Request body for `POST /api/encurtador`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL to shorten (HTTP/HTTPS, at most 2048 characters).
    #[validate(custom(function = "validate_original_url"))]
    pub url_original: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub codigo_curto: String,
    pub url_encurtada_completa: String,
    pub url_original: String,
}

impl From<ShortenedLink> for ShortenResponse {
    fn from(link: ShortenedLink) -> Self {
        Self {
            codigo_curto: link.code,
            url_encurtada_completa: link.full_short_url,
            url_original: link.original_url,
        }
    }
}
