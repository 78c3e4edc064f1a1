//! User entity and credential projections.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user. The password hash is deliberately not part of this type.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// The minimal projection needed to check a login attempt.
///
/// Only returned by [`crate::domain::repositories::UserRepository::find_credentials_by_email`].
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}

/// Input data for creating a new user. `password_hash` must already be hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
