//! Handlers for registration, login and profile endpoints.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, LoginResponse, ProfileResponse, RegisterRequest};
use crate::api::dto::message::MessageResponse;
use crate::api::middleware::AuthenticatedUser;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /registrar`
///
/// # Request Body
///
/// ```json
/// { "nome": "Ana", "email": "ana@example.com", "senha": "secret1" }
/// ```
///
/// # Errors
///
/// - **400**: invalid fields
/// - **409**: email already registered
pub async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    state
        .auth_service
        .register(&payload.nome, &payload.email, &payload.senha)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Usuário criado com sucesso.")),
    ))
}

/// Exchanges email and password for an access token.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Response
///
/// ```json
/// { "accessToken": "eyJhbGciOiJIUzI1NiJ9..." }
/// ```
///
/// # Errors
///
/// - **400**: malformed body
/// - **401**: unknown email or wrong password (same message for both)
pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let access_token = state
        .auth_service
        .login(&payload.email, &payload.senha)
        .await?;

    Ok(Json(LoginResponse { access_token }))
}

/// Returns the identity carried by the caller's token.
///
/// # Endpoint
///
/// `GET /perfil`
pub async fn profile_handler(user: AuthenticatedUser) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        sub: user.user_id,
        email: user.email,
    })
}
