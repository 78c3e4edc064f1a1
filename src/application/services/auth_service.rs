//! Registration, login and session verification.

use std::sync::Arc;

use serde_json::json;

use crate::domain::credentials::CredentialHasher;
use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::domain::session::{SessionClaims, TokenIssuer};
use crate::error::AppError;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Service for user accounts and session tokens.
///
/// Unknown email and wrong password produce the same [`AppError::Unauthorized`]
/// so a caller cannot tell which half of the login failed.
pub struct AuthService<U, H, T>
where
    U: UserRepository + ?Sized,
    H: CredentialHasher + ?Sized,
    T: TokenIssuer + ?Sized,
{
    user_repository: Arc<U>,
    hasher: Arc<H>,
    token_issuer: Arc<T>,
}

impl<U, H, T> AuthService<U, H, T>
where
    U: UserRepository + ?Sized,
    H: CredentialHasher + ?Sized,
    T: TokenIssuer + ?Sized,
{
    pub fn new(user_repository: Arc<U>, hasher: Arc<H>, token_issuer: Arc<T>) -> Self {
        Self {
            user_repository,
            hasher,
            token_issuer,
        }
    }

    /// Registers a new user with a hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered and
    /// [`AppError::Internal`] if hashing or persisting fails.
    #[tracing::instrument(skip(self, password))]
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AppError> {
        if self.user_repository.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict(
                "Email already registered",
                json!({ "email": email }),
            ));
        }

        let password_hash = self.hasher.hash(password).await?;

        let user = self
            .user_repository
            .create(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Checks the credentials and issues an access token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for an unknown email or a wrong
    /// password, [`AppError::Internal`] if the hash primitive or signing fails.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let Some(credentials) = self.user_repository.find_credentials_by_email(email).await? else {
            tracing::debug!("login for unknown email");
            return Err(invalid_credentials());
        };

        if !self
            .hasher
            .verify(password, &credentials.password_hash)
            .await?
        {
            tracing::debug!(user_id = %credentials.id, "password mismatch");
            return Err(invalid_credentials());
        }

        self.token_issuer.issue(credentials.id, &credentials.email)
    }

    /// Verifies a bearer token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is invalid or expired.
    pub fn authenticate(&self, token: &str) -> Result<SessionClaims, AppError> {
        self.token_issuer.verify(token)
    }
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized(INVALID_CREDENTIALS, json!({}))
}
