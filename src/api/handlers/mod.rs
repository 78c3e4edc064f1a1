//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod health;
pub mod my_links;
pub mod redirect;
pub mod shorten;

pub use auth::{login_handler, profile_handler, register_handler};
pub use health::health_handler;
pub use my_links::{delete_link_handler, my_links_handler, update_link_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
