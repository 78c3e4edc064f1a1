//! Handlers for the caller's own links.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection, rejection::QueryRejection},
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::links::{LinkDetailsResponse, MyLinksPageResponse, UpdateLinkRequest};
use crate::api::dto::message::MessageResponse;
use crate::api::dto::pagination::MyLinksQuery;
use crate::api::middleware::AuthenticatedUser;
use crate::error::AppError;
use crate::state::AppState;

fn parse_link_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::bad_request("Invalid link id", json!({ "idUrl": raw })))
}

/// Lists the caller's active links, newest first.
///
/// # Endpoint
///
/// `GET /api/minhas-urls?pagina=1&limite=10`
///
/// # Query Parameters
///
/// - `pagina` - page number, at least 1 (default: 1)
/// - `limite` - page size, 1 to 100 (default: 10)
pub async fn my_links_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    query: Result<Query<MyLinksQuery>, QueryRejection>,
) -> Result<Json<MyLinksPageResponse>, AppError> {
    let Query(query) = query?;
    query.validate()?;

    let page = state
        .my_links_service
        .list_paged(user.user_id, query.page(), query.page_size())
        .await?;

    Ok(Json(MyLinksPageResponse::from_page(
        page,
        &state.base_url.base_url(),
    )))
}

/// Changes the destination of one of the caller's links.
///
/// # Endpoint
///
/// `PATCH /api/{idUrl}`
///
/// # Errors
///
/// - **400**: `idUrl` is not a UUID or the URL is invalid
/// - **403**: the link belongs to someone else
/// - **404**: no active link with this id
pub async fn update_link_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id_url): Path<String>,
    payload: Result<Json<UpdateLinkRequest>, JsonRejection>,
) -> Result<Json<LinkDetailsResponse>, AppError> {
    let link_id = parse_link_id(&id_url)?;
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state
        .my_links_service
        .update_link(link_id, user.user_id, &payload.url_original)
        .await?;

    Ok(Json(LinkDetailsResponse::from_link(
        link,
        &state.base_url.base_url(),
    )))
}

/// Soft-deletes one of the caller's links.
///
/// # Endpoint
///
/// `DELETE /api/{idUrl}`
///
/// # Errors
///
/// Same as [`update_link_handler`].
pub async fn delete_link_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id_url): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let link_id = parse_link_id(&id_url)?;

    state
        .my_links_service
        .delete_link(link_id, user.user_id)
        .await?;

    Ok(Json(MessageResponse::new("URL encurtada deletada com sucesso.")))
}
