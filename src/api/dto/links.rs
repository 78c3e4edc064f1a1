//! DTOs for listing, updating and deleting the caller's links.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::application::services::LinkPage;
use crate::domain::entities::Link;
use crate::utils::url_validator::validate_original_url;

/// Request body for `PATCH /api/{idUrl}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkRequest {
    /// New destination URL for this link.
    #[validate(custom(function = "validate_original_url"))]
    pub url_original: String,
}

/// A link as shown to its owner.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDetailsResponse {
    pub id: Uuid,
    pub url_original: String,
    pub codigo_curto: String,
    pub url_encurtada_completa: String,
    pub cliques: i64,
    pub data_criacao: DateTime<Utc>,
    pub data_atualizacao: DateTime<Utc>,
}

impl LinkDetailsResponse {
    /// Builds the details view; the full URL is `{base_url}/{code}`.
    pub fn from_link(link: Link, base_url: &str) -> Self {
        Self {
            url_encurtada_completa: format!("{}/{}", base_url, link.code),
            id: link.id,
            url_original: link.original_url,
            codigo_curto: link.code,
            cliques: link.clicks,
            data_criacao: link.created_at,
            data_atualizacao: link.updated_at,
        }
    }
}

/// One page of the caller's links.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyLinksPageResponse {
    pub dados: Vec<LinkDetailsResponse>,
    pub total_itens: i64,
    pub total_paginas: i64,
    pub pagina_atual: i64,
    pub itens_por_pagina: i64,
}

impl MyLinksPageResponse {
    pub fn from_page(page: LinkPage, base_url: &str) -> Self {
        Self {
            dados: page
                .items
                .into_iter()
                .map(|link| LinkDetailsResponse::from_link(link, base_url))
                .collect(),
            total_itens: page.total_items,
            total_paginas: page.total_pages,
            pagina_atual: page.page,
            itens_por_pagina: page.page_size,
        }
    }
}
