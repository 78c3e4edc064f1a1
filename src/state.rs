//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::application::base_url::BaseUrlResolver;
use crate::application::services::{
    AuthService, MyLinksService, RedirectService, ShortenerService,
};
use crate::domain::credentials::CredentialHasher;
use crate::domain::repositories::{LinkRepository, UserRepository};
use crate::domain::session::TokenIssuer;
use crate::infrastructure::persistence::HealthProbe;

pub type DynAuthService = AuthService<dyn UserRepository, dyn CredentialHasher, dyn TokenIssuer>;
pub type DynShortenerService = ShortenerService<dyn LinkRepository, dyn BaseUrlResolver>;
pub type DynMyLinksService = MyLinksService<dyn LinkRepository>;
pub type DynRedirectService = RedirectService<dyn LinkRepository>;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<DynAuthService>,
    pub shortener_service: Arc<DynShortenerService>,
    pub my_links_service: Arc<DynMyLinksService>,
    pub redirect_service: Arc<DynRedirectService>,
    pub base_url: Arc<dyn BaseUrlResolver>,
    pub health: Arc<dyn HealthProbe>,
}

impl AppState {
    /// Wires every service over the given collaborators.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        user_repository: Arc<dyn UserRepository>,
        hasher: Arc<dyn CredentialHasher>,
        token_issuer: Arc<dyn TokenIssuer>,
        base_url: Arc<dyn BaseUrlResolver>,
        health: Arc<dyn HealthProbe>,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(user_repository, hasher, token_issuer)),
            shortener_service: Arc::new(ShortenerService::new(
                link_repository.clone(),
                base_url.clone(),
            )),
            my_links_service: Arc::new(MyLinksService::new(link_repository.clone())),
            redirect_service: Arc::new(RedirectService::new(link_repository)),
            base_url,
            health,
        }
    }
}
