//! Domain layer: entities and the contracts of external collaborators.
//!
//! Nothing here touches SQL, HTTP routing or a concrete crypto primitive.
//!
//! # Architecture
//!
//! - [`entities`] - Plain data records (`User`, `Link`)
//! - [`repositories`] - Persistence store contracts
//! - [`credentials`] - Password hashing contract
//! - [`session`] - Session claims and token issuing contract
//!
//! Business rules live in [`crate::application::services`]; implementations of
//! the contracts live in [`crate::infrastructure`].

pub mod credentials;
pub mod entities;
pub mod repositories;
pub mod session;
