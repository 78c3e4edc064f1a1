//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the persistence store. Concrete implementations live in
//! `crate::infrastructure::persistence`; mocks are generated with `mockall` for
//! unit tests.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Short link CRUD, soft delete and click counting
//! - [`UserRepository`] - User accounts and credential lookup
//!
//! # Testing
//!
//! See `tests/repository_*.rs` for the PostgreSQL-backed tests.

pub mod link_repository;
pub mod user_repository;

pub use link_repository::LinkRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
