//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! credential checks and ownership rules. Services consume repository traits and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::code_generator::CodeGenerator`] - Unique short code generation
//! - [`services::shortener_service::ShortenerService`] - Idempotent URL shortening
//! - [`services::my_links_service::MyLinksService`] - Owner-scoped listing, update and delete
//! - [`services::redirect_service::RedirectService`] - Code resolution and click counting
//! - [`services::auth_service::AuthService`] - Registration, login and session checks

pub mod base_url;
pub mod services;
