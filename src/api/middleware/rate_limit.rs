//! Per-endpoint-group rate limiting using the token bucket algorithm.
//!
//! Each group replenishes one request every `60s / limit` and allows a burst of
//! `limit`, so a client gets at most `limit` requests in any one-minute window
//! once the bucket is drained. Requests exceeding the limit receive
//! `429 Too Many Requests`.
//!
//! # Key Extraction
//!
//! Rate limits are applied per client IP address extracted from the socket peer
//! address; the server must be started with
//! `into_make_service_with_connect_info::<SocketAddr>()`.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Registration and login: 5 requests per minute.
pub const AUTH_PER_MINUTE: u32 = 5;
/// Shortening and link management: 10 requests per minute.
pub const SHORTENER_PER_MINUTE: u32 = 10;
/// Redirects: 15 requests per minute.
pub const REDIRECT_PER_MINUTE: u32 = 15;

fn per_minute(limit: u32) -> RateLimitLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(60_000 / u64::from(limit))
            .burst_size(limit)
            .finish()
            .expect("rate limit period and burst size are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Limiter for `POST /registrar` and `POST /login`.
pub fn auth_layer() -> RateLimitLayer {
    per_minute(AUTH_PER_MINUTE)
}

/// Limiter for the `/api` shortener routes.
pub fn shortener_layer() -> RateLimitLayer {
    per_minute(SHORTENER_PER_MINUTE)
}

/// Limiter for the redirect routes.
pub fn redirect_layer() -> RateLimitLayer {
    per_minute(REDIRECT_PER_MINUTE)
}
