//! Database connectivity probe used by the health endpoint.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::error::AppError;

/// Checks whether the persistence store answers.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn check(&self) -> Result<(), AppError>;
}

/// Runs `SELECT 1` against the pool.
pub struct PgHealthProbe {
    pool: Arc<PgPool>,
}

impl PgHealthProbe {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthProbe for PgHealthProbe {
    async fn check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
