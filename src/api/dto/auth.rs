//! DTOs for registration, login and profile endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::session::SessionClaims;

/// Request body for `POST /registrar`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1 to 255 characters"))]
    pub nome: String,

    #[validate(
        email(message = "Invalid email"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    pub email: String,

    #[validate(length(min = 6, max = 50, message = "Password must be 6 to 50 characters"))]
    pub senha: String,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub senha: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

/// Identity of the caller, as carried by the access token.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub sub: Uuid,
    pub email: String,
}

impl From<SessionClaims> for ProfileResponse {
    fn from(claims: SessionClaims) -> Self {
        Self {
            sub: claims.sub,
            email: claims.email,
        }
    }
}
