//! Password hashing contract.

use crate::error::AppError;
use async_trait::async_trait;

/// Hashes and verifies passwords with an adaptive, salted primitive.
///
/// A verification that completes without a match returns `Ok(false)`. Only a
/// fault of the primitive itself (unparseable stored hash, failed worker) is an
/// error, always reported as [`AppError::Internal`].
///
/// # Implementations
///
/// - [`crate::infrastructure::security::Argon2CredentialHasher`]
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    /// Hashes a plaintext password into a self-describing hash string.
    async fn hash(&self, plain_password: &str) -> Result<String, AppError>;

    /// Checks a plaintext password against a stored hash.
    async fn verify(&self, plain_password: &str, password_hash: &str) -> Result<bool, AppError>;
}
