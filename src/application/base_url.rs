//! Public base URL used to build full short URLs.

use crate::config::{Config, Environment};

/// Supplies the origin that short codes are appended to.
///
/// Returned values never end with `/`.
pub trait BaseUrlResolver: Send + Sync {
    fn base_url(&self) -> String;
}

/// A base URL fixed at construction time.
#[derive(Debug, Clone)]
pub struct FixedBaseUrl {
    base: String,
}

impl FixedBaseUrl {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Picks the redirect origin for the configured environment.
    ///
    /// Production uses `APP_BASE_URL_REDIRECT`; every other environment points
    /// at the local listener.
    pub fn from_config(config: &Config) -> Self {
        match (config.environment, &config.redirect_base_url) {
            (Environment::Production, Some(base)) => Self::new(base.as_str()),
            _ => Self::new(format!("http://localhost:{}", config.listen_port())),
        }
    }
}

impl BaseUrlResolver for FixedBaseUrl {
    fn base_url(&self) -> String {
        self.base.clone()
    }
}
