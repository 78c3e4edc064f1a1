//! API route configuration.
//!
//! Route groups are returned without rate limiting so they can be mounted
//! as-is in tests; [`crate::routes::app_router`] adds the per-group limiters.

use crate::api::handlers::{
    delete_link_handler, login_handler, my_links_handler, profile_handler, redirect_handler,
    register_handler, shorten_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// Registration and login.
///
/// # Endpoints
///
/// - `POST /registrar` - Create an account
/// - `POST /login`     - Exchange credentials for an access token
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/registrar", post(register_handler))
        .route("/login", post(login_handler))
}

/// Session introspection.
///
/// - `GET /perfil` - Claims of the bearer token
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/perfil", get(profile_handler))
}

/// Shortener routes, meant to be nested under `/api`.
///
/// # Endpoints
///
/// - `POST   /encurtador`  - Shorten a URL (bearer optional)
/// - `GET    /minhas-urls` - List own links (bearer required)
/// - `PATCH  /{idUrl}`     - Change destination (bearer required)
/// - `DELETE /{idUrl}`     - Soft-delete (bearer required)
pub fn shortener_routes() -> Router<AppState> {
    Router::new()
        .route("/encurtador", post(shorten_handler))
        .route("/minhas-urls", get(my_links_handler))
        .route(
            "/{idUrl}",
            patch(update_link_handler).delete(delete_link_handler),
        )
}

/// Redirect routes.
///
/// - `GET /{codigoCurto}`       - Public short URL
/// - `GET /api/r/{codigoCurto}` - Form returned for newly created links
pub fn redirect_routes() -> Router<AppState> {
    Router::new()
        .route("/{codigoCurto}", get(redirect_handler))
        .route("/api/r/{codigoCurto}", get(redirect_handler))
}
