//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::{LinkStore, StoreError};
use crate::utils::db_error::is_unique_violation_on_code;

/// PostgreSQL store for link storage and retrieval.
///
/// The primary key on `links.code` enforces uniqueness, so concurrent inserts
/// of the same code are serialized by the database and the loser receives a
/// unique violation, reported as [`StoreError::AlreadyExists`].
pub struct PgLinkStore {
    pool: Arc<PgPool>,
}

impl PgLinkStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn unavailable(e: sqlx::Error) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn put(&self, code: &str, target: &str) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO links (code, target) VALUES ($1, $2)")
            .bind(code)
            .bind(target)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation_on_code(&e) {
                    StoreError::AlreadyExists(code.to_owned())
                } else {
                    unavailable(e)
                }
            })?;

        Ok(())
    }

    async fn get(&self, code: &str) -> Result<Option<Link>, StoreError> {
        let row: Option<(String, String, DateTime<Utc>)> =
            sqlx::query_as("SELECT code, target, created_at FROM links WHERE code = $1")
                .bind(code)
                .fetch_optional(self.pool.as_ref())
                .await
                .map_err(unavailable)?;

        Ok(row.map(|(code, target, created_at)| Link::new(code, target, created_at)))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(unavailable)?;

        Ok(count.max(0) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(unavailable)?;

        Ok(())
    }
}
