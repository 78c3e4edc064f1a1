//! HS256 session tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde_json::json;
use uuid::Uuid;

use crate::domain::session::{SessionClaims, TokenIssuer};
use crate::error::AppError;

/// Signs and verifies access tokens with a shared secret.
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_seconds: u64,
}

impl JwtTokenIssuer {
    pub fn new(secret: &str, expiration_seconds: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration_seconds,
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user_id: Uuid, email: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = i64::try_from(self.expiration_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::internal(
                    "Token lifetime out of range",
                    json!({ "expiration_seconds": self.expiration_seconds }),
                )
            })?;

        let claims = SessionClaims {
            sub: user_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AppError::internal("Failed to sign access token", json!({ "reason": e.to_string() }))
        })
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, AppError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "rejected access token");
                AppError::unauthorized(
                    "Invalid or expired token",
                    json!({ "reason": e.to_string() }),
                )
            })
    }
}
