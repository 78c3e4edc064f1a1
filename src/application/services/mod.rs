//! Business logic services for the application layer.

pub mod auth_service;
pub mod code_generator;
pub mod my_links_service;
pub mod redirect_service;
pub mod shortener_service;

pub use auth_service::AuthService;
pub use code_generator::{CodeGenerationError, CodeGenerator};
pub use my_links_service::{LinkPage, MyLinksService};
pub use redirect_service::RedirectService;
pub use shortener_service::{ShortenedLink, ShortenerService};
