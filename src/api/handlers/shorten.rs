//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::middleware::AuthenticatedUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or reuses) a short link for a URL.
///
/// # Endpoint
///
/// `POST /api/encurtador`
///
/// A bearer token is optional. Without a valid one the link is anonymous.
///
/// # Request Body
///
/// ```json
/// { "urlOriginal": "https://example.com/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "codigoCurto": "aZbKq7",
///   "urlEncurtadaCompleta": "http://localhost:3000/api/r/aZbKq7",
///   "urlOriginal": "https://example.com/long/path"
/// }
/// ```
///
/// # Errors
///
/// - **400**: invalid URL
/// - **409**: code taken by a concurrent request, retry
/// - **500**: no free code could be generated
pub async fn shorten_handler(
    State(state): State<AppState>,
    user: Option<AuthenticatedUser>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let shortened = state
        .shortener_service
        .shorten(&payload.url_original, user.map(|u| u.user_id))
        .await?;

    Ok((StatusCode::CREATED, Json(shortened.into())))
}
