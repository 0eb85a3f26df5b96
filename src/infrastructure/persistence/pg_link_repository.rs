//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkUpdate, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_code;
use serde_json::json;

/// PostgreSQL repository for link storage and retrieval.
///
/// All statements are single-row operations bound through prepared
/// parameters. `update` and `delete` filter on both `id` and `owner_id`,
/// so the write and the ownership check are one atomic statement.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    fn map_write_error(e: sqlx::Error, short_code: &str) -> AppError {
        if is_unique_violation_on_code(&e) {
            return AppError::conflict(
                "Short code already exists",
                json!({ "short_code": short_code }),
            );
        }

        AppError::from(e)
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (owner_id, original_url, short_code)
            VALUES ($1, $2, $3)
            RETURNING id, owner_id, original_url, short_code, created_at, updated_at
            "#,
        )
        .bind(&new_link.owner_id)
        .bind(&new_link.original_url)
        .bind(&new_link.short_code)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| Self::map_write_error(e, &new_link.short_code))
    }

    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, owner_id, original_url, short_code, created_at, updated_at
            FROM links
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, owner_id, original_url, short_code, created_at, updated_at
            FROM links
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn update(
        &self,
        id: i64,
        owner_id: &str,
        update: LinkUpdate,
    ) -> Result<Option<Link>, AppError> {
        sqlx::query_as::<_, Link>(
            r#"
            UPDATE links
            SET original_url = $3, short_code = $4, updated_at = now()
            WHERE id = $1 AND owner_id = $2
            RETURNING id, owner_id, original_url, short_code, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(&update.original_url)
        .bind(&update.short_code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| Self::map_write_error(e, &update.short_code))
    }

    async fn delete(&self, id: i64, owner_id: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            DELETE FROM links
            WHERE id = $1 AND owner_id = $2
            RETURNING id, owner_id, original_url, short_code, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }
}
