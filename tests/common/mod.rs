#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::json;
use shortlink_services::api::handlers::health_handler;
use shortlink_services::api::routes::{
    auth_routes, profile_routes, redirect_routes, shortener_routes,
};
use shortlink_services::application::base_url::FixedBaseUrl;
use shortlink_services::domain::entities::{
    Link, LinkOwner, NewLink, NewUser, User, UserCredentials,
};
use shortlink_services::domain::repositories::{LinkRepository, UserRepository};
use shortlink_services::error::AppError;
use shortlink_services::infrastructure::persistence::HealthProbe;
use shortlink_services::infrastructure::security::{Argon2CredentialHasher, JwtTokenIssuer};
use shortlink_services::state::AppState;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub const BASE_URL: &str = "http://localhost:3000";
pub const TEST_SECRET: &str = "test-signing-secret";

/// Link store backed by a vector; enforces code uniqueness like the real table.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<Link>>,
}

impl InMemoryLinkRepository {
    pub fn get_by_code(&self, code: &str) -> Option<Link> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.code == code)
            .cloned()
    }

    pub fn insert(&self, link: Link) {
        self.links.lock().unwrap().push(link);
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.lock().unwrap();
        if links.iter().any(|l| l.code == new_link.code) {
            return Err(AppError::conflict(
                "Short code already exists",
                json!({ "code": new_link.code }),
            ));
        }

        let now = Utc::now();
        let link = Link {
            id: Uuid::new_v4(),
            original_url: new_link.original_url,
            code: new_link.code,
            clicks: 0,
            owner_id: new_link.owner.user_id(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        links.push(link.clone());
        Ok(link)
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.links.lock().unwrap().iter().any(|l| l.code == code))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.get_by_code(code))
    }

    async fn find_active_by_url_and_owner(
        &self,
        original_url: &str,
        owner: LinkOwner,
    ) -> Result<Option<Link>, AppError> {
        let owner_id = owner.user_id();
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| {
                l.original_url == original_url && l.owner_id == owner_id && l.deleted_at.is_none()
            })
            .cloned())
    }

    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Link>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.id == id && l.deleted_at.is_none())
            .cloned())
    }

    async fn list_active_by_owner(
        &self,
        owner_id: Uuid,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Link>, AppError> {
        // Insertion order stands in for created_at, newest first
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|l| l.owner_id == Some(owner_id) && l.deleted_at.is_none())
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count_active_by_owner(&self, owner_id: Uuid) -> Result<i64, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.owner_id == Some(owner_id) && l.deleted_at.is_none())
            .count() as i64)
    }

    async fn update_original_url(&self, id: Uuid, original_url: &str) -> Result<Link, AppError> {
        let mut links = self.links.lock().unwrap();
        let link = links
            .iter_mut()
            .find(|l| l.id == id && l.deleted_at.is_none())
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": id })))?;

        link.original_url = original_url.to_string();
        link.updated_at = Utc::now();
        Ok(link.clone())
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut links = self.links.lock().unwrap();
        match links
            .iter_mut()
            .find(|l| l.id == id && l.deleted_at.is_none())
        {
            Some(link) => {
                link.deleted_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn increment_clicks(&self, id: Uuid) -> Result<(), AppError> {
        if let Some(link) = self.links.lock().unwrap().iter_mut().find(|l| l.id == id) {
            link.clicks += 1;
        }
        Ok(())
    }
}

/// User store backed by a vector; enforces email uniqueness.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<(User, String)>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|(u, _)| u.email == new_user.email) {
            return Err(AppError::conflict(
                "Email already registered",
                json!({ "email": new_user.email }),
            ));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        users.push((user.clone(), new_user.password_hash));
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone()))
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, hash)| UserCredentials {
                id: u.id,
                email: u.email.clone(),
                password_hash: hash.clone(),
            }))
    }

    async fn list(&self, limit: i64) -> Result<Vec<User>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .rev()
            .take(limit as usize)
            .map(|(u, _)| u.clone())
            .collect())
    }
}

pub struct StaticHealthProbe {
    pub healthy: bool,
}

#[async_trait]
impl HealthProbe for StaticHealthProbe {
    async fn check(&self) -> Result<(), AppError> {
        if self.healthy {
            Ok(())
        } else {
            Err(AppError::internal("Database error", json!({})))
        }
    }
}

pub fn create_test_state_with_health(healthy: bool) -> (AppState, Arc<InMemoryLinkRepository>) {
    let link_repo = Arc::new(InMemoryLinkRepository::default());
    let user_repo = Arc::new(InMemoryUserRepository::default());

    let state = AppState::new(
        link_repo.clone(),
        user_repo,
        Arc::new(Argon2CredentialHasher::new()),
        Arc::new(JwtTokenIssuer::new(TEST_SECRET, 3600)),
        Arc::new(FixedBaseUrl::new(BASE_URL)),
        Arc::new(StaticHealthProbe { healthy }),
    );

    (state, link_repo)
}

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    create_test_state_with_health(true)
}

/// Full route table without rate limiting (axum-test carries no peer address).
pub fn create_test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .merge(auth_routes())
        .merge(profile_routes())
        .nest("/api", shortener_routes())
        .merge(redirect_routes())
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

pub async fn register_user(server: &TestServer, email: &str, password: &str) {
    server
        .post("/registrar")
        .json(&json!({ "nome": "Test User", "email": email, "senha": password }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
}

/// Registers `email` and returns a fresh access token for it.
pub async fn register_and_login(server: &TestServer, email: &str) -> String {
    register_user(server, email, "secret1").await;

    let response = server
        .post("/login")
        .json(&json!({ "email": email, "senha": "secret1" }))
        .await;
    response.assert_status_ok();

    response.json::<serde_json::Value>()["accessToken"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Shortens `url` as the bearer of `token` and returns the response body.
pub async fn shorten(server: &TestServer, url: &str, token: Option<&str>) -> serde_json::Value {
    let mut request = server
        .post("/api/encurtador")
        .json(&json!({ "urlOriginal": url }));
    if let Some(token) = token {
        request = request.authorization_bearer(token);
    }

    let response = request.await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json()
}
