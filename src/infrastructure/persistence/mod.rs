//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with bound
//! parameters and `FromRow` row structs.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Link storage, soft delete and click counting
//! - [`PgUserRepository`] - User accounts and credential lookup
//! - [`PgHealthProbe`] - Database connectivity check

pub mod health_probe;
pub mod pg_link_repository;
pub mod pg_user_repository;

pub use health_probe::{HealthProbe, PgHealthProbe};
pub use pg_link_repository::PgLinkRepository;
pub use pg_user_repository::PgUserRepository;
