//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Field names follow the public Portuguese wire format
//! (`urlOriginal`, `codigoCurto`, ...).

pub mod auth;
pub mod health;
pub mod links;
pub mod message;
pub mod pagination;
pub mod shorten;
