//! Session claims and the token issuer contract.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Id of the authenticated user.
    pub sub: Uuid,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies signed session tokens.
///
/// # Implementations
///
/// - [`crate::infrastructure::security::JwtTokenIssuer`]
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    /// Signs a token for `user_id` / `email` with the configured expiration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails.
    fn issue(&self, user_id: Uuid, email: &str) -> Result<String, AppError>;

    /// Verifies signature and expiry and returns the claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for any invalid token.
    fn verify(&self, token: &str) -> Result<SessionClaims, AppError>;
}
