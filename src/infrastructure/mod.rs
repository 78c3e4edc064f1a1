//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and credential security.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`security`] - Argon2 password hashing and JWT session tokens

pub mod persistence;
pub mod security;
