//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Link, LinkOwner, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::db_error::{LINKS_CODE_CONSTRAINT, is_unique_violation_on};

const LINK_COLUMNS: &str =
    "id, original_url, code, clicks, owner_id, created_at, updated_at, deleted_at";

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: Uuid,
    original_url: String,
    code: String,
    clicks: i64,
    owner_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link {
            id: r.id,
            original_url: r.original_url,
            code: r.code,
            clicks: r.clicks,
            owner_id: r.owner_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
            deleted_at: r.deleted_at,
        }
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Uses bound parameters throughout; no value is ever interpolated into SQL.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let sql = format!(
            "INSERT INTO links (code, original_url, owner_id) VALUES ($1, $2, $3) RETURNING {LINK_COLUMNS}"
        );

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(&new_link.code)
            .bind(&new_link.original_url)
            .bind(new_link.owner.user_id())
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation_on(&e, LINKS_CODE_CONSTRAINT) {
                    AppError::conflict(
                        "Short code already exists",
                        json!({ "code": new_link.code }),
                    )
                } else {
                    e.into()
                }
            })?;

        Ok(row.into())
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM links WHERE code = $1)")
            .bind(code)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(exists)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let sql = format!("SELECT {LINK_COLUMNS} FROM links WHERE code = $1");

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Link::from))
    }

    async fn find_active_by_url_and_owner(
        &self,
        original_url: &str,
        owner: LinkOwner,
    ) -> Result<Option<Link>, AppError> {
        // IS NOT DISTINCT FROM makes NULL match NULL, so anonymous only matches anonymous
        let sql = format!(
            r#"
            SELECT {LINK_COLUMNS}
            FROM links
            WHERE original_url = $1
              AND owner_id IS NOT DISTINCT FROM $2
              AND deleted_at IS NULL
            ORDER BY created_at ASC
            LIMIT 1
            "#
        );

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(original_url)
            .bind(owner.user_id())
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Link::from))
    }

    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Link>, AppError> {
        let sql = format!("SELECT {LINK_COLUMNS} FROM links WHERE id = $1 AND deleted_at IS NULL");

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Link::from))
    }

    async fn list_active_by_owner(
        &self,
        owner_id: Uuid,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Link>, AppError> {
        let sql = format!(
            r#"
            SELECT {LINK_COLUMNS}
            FROM links
            WHERE owner_id = $1 AND deleted_at IS NULL
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#
        );

        let rows = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(owner_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn count_active_by_owner(&self, owner_id: Uuid) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM links WHERE owner_id = $1 AND deleted_at IS NULL",
        )
        .bind(owner_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn update_original_url(&self, id: Uuid, original_url: &str) -> Result<Link, AppError> {
        let sql = format!(
            r#"
            UPDATE links
            SET original_url = $2, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING {LINK_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(id)
            .bind(original_url)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Link::from)
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": id })))
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE links SET deleted_at = NOW(), updated_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_clicks(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("UPDATE links SET clicks = clicks + 1 WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
