//! Credential hashing and session token implementations.

pub mod argon2_hasher;
pub mod jwt;

pub use argon2_hasher::Argon2CredentialHasher;
pub use jwt::JwtTokenIssuer;
