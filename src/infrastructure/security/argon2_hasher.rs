//! Argon2id password hashing.

use argon2::{
    Argon2,
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use async_trait::async_trait;
use rand::RngCore;
use serde_json::json;

use crate::domain::credentials::CredentialHasher;
use crate::error::AppError;

/// Argon2id with default parameters and a random 16-byte salt.
///
/// Hashing is CPU-bound, so both operations run on the blocking pool.
#[derive(Debug, Clone, Default)]
pub struct Argon2CredentialHasher;

impl Argon2CredentialHasher {
    pub fn new() -> Self {
        Self
    }
}

/// Hashes a password into a PHC string (`$argon2id$...`).
pub fn hash_password(plain_password: &str) -> Result<String, AppError> {
    let mut salt_bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| {
        AppError::internal("Password hashing failed", json!({ "reason": e.to_string() }))
    })?;

    Argon2::default()
        .hash_password(plain_password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal("Password hashing failed", json!({ "reason": e.to_string() })))
}

/// Checks a password against a PHC string.
///
/// Only a completed comparison that does not match is `Ok(false)`. An
/// unparseable hash, a foreign algorithm or invalid parameters are errors.
pub fn verify_password(plain_password: &str, password_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(password_hash).map_err(|e| {
        AppError::internal("Malformed password hash", json!({ "reason": e.to_string() }))
    })?;

    match Argon2::default().verify_password(plain_password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::internal(
            "Password verification failed",
            json!({ "reason": e.to_string() }),
        )),
    }
}

fn join_error(e: tokio::task::JoinError) -> AppError {
    AppError::internal("Password worker failed", json!({ "reason": e.to_string() }))
}

#[async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    async fn hash(&self, plain_password: &str) -> Result<String, AppError> {
        let plain_password = plain_password.to_owned();

        tokio::task::spawn_blocking(move || hash_password(&plain_password))
            .await
            .map_err(join_error)?
    }

    async fn verify(&self, plain_password: &str, password_hash: &str) -> Result<bool, AppError> {
        let plain_password = plain_password.to_owned();
        let password_hash = password_hash.to_owned();

        tokio::task::spawn_blocking(move || verify_password(&plain_password, &password_hash))
            .await
            .map_err(join_error)?
    }
}
