//! Core domain entities.
//!
//! Entities are plain records. Relations are expressed as foreign-key ids
//! (`Link::owner_id`) and resolved through explicit repository queries.
//!
//! # Entity Types
//!
//! - [`User`] - A registered account
//! - [`Link`] - A short code mapped to an original URL
//!
//! Creation inputs live in separate structs (`NewUser`, `NewLink`).

pub mod link;
pub mod user;

pub use link::{Link, LinkOwner, NewLink};
pub use user::{NewUser, User, UserCredentials};
