//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /registrar`, `POST /login` - Accounts (5 req/min per IP)
//! - `GET  /perfil`                   - Token claims
//! - `/api/*`                         - Shortener (10 req/min per IP)
//! - `GET  /{codigoCurto}`, `GET /api/r/{codigoCurto}` - Redirects (15 req/min per IP)
//! - `GET  /health`                   - Database health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket per route group
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::api::routes::{auth_routes, profile_routes, redirect_routes, shortener_routes};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The returned service must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()` so the rate limiters
/// can read the peer address.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(auth_routes().layer(rate_limit::auth_layer()))
        .merge(profile_routes())
        .nest("/api", shortener_routes().layer(rate_limit::shortener_layer()))
        .merge(redirect_routes().layer(rate_limit::redirect_layer()))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
