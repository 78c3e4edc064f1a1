//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{codigoCurto}` and `GET /api/r/{codigoCurto}`
///
/// # Request Flow
///
/// 1. Reject codes that are not exactly 6 characters
/// 2. Look the code up
/// 3. Count the click
/// 4. Return 302 Found
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed code.
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.redirect_service.resolve(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]))
}
