//! Bearer token identity extraction.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::request::Parts,
};
use axum_auth::AuthBearer;
use uuid::Uuid;

use crate::{error::AppError, state::AppState};

/// The caller resolved from `Authorization: Bearer <token>`.
///
/// Use `AuthenticatedUser` on routes that require a session and
/// `Option<AuthenticatedUser>` where anonymous callers are allowed; with the
/// optional form a missing or invalid token yields `None` instead of a 401.
///
/// # Errors
///
/// Returns `401 Unauthorized` (with `WWW-Authenticate: Bearer`) if:
/// - Authorization header is missing or not a bearer token
/// - Token signature is invalid or the token has expired
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let AuthBearer(token) = AuthBearer::from_request_parts(parts, &())
            .await
            .map_err(|_| {
                AppError::unauthorized(
                    "Unauthorized",
                    serde_json::json!({"reason": "Authorization header is missing or invalid"}),
                )
            })?;

        let claims = state.auth_service.authenticate(&token)?;

        Ok(Self {
            user_id: claims.sub,
            email: claims.email,
        })
    }
}

impl OptionalFromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(
            <Self as FromRequestParts<AppState>>::from_request_parts(parts, state)
                .await
                .ok(),
        )
    }
}
