//! PostgreSQL implementation of the redirect repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::RedirectRecord;
use crate::domain::repositories::RedirectRepository;
use crate::error::StoreError;

#[derive(sqlx::FromRow)]
struct RedirectRow {
    short_path: String,
    url: String,
    hit_count: i64,
}

impl From<RedirectRow> for RedirectRecord {
    fn from(row: RedirectRow) -> Self {
        RedirectRecord::new(row.short_path, row.url, row.hit_count)
    }
}

/// PostgreSQL repository backed by the `redirects` table.
///
/// Uses SQLx prepared statements. `put` is an upsert so it behaves as a full
/// overwrite of the row.
pub struct PgRedirectRepository {
    pool: Arc<PgPool>,
}

impl PgRedirectRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RedirectRepository for PgRedirectRepository {
    async fn get(&self, short_path: &str) -> Result<Option<RedirectRecord>, StoreError> {
        // TEXT cannot hold NUL, so no such row can exist.
        if short_path.contains('\0') {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, RedirectRow>(
            r#"
            SELECT short_path, url, hit_count
            FROM redirects
            WHERE short_path = $1
            "#,
        )
        .bind(short_path)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(RedirectRecord::from))
    }

    async fn put(&self, record: &RedirectRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO redirects (short_path, url, hit_count)
            VALUES ($1, $2, $3)
            ON CONFLICT (short_path)
            DO UPDATE SET url = EXCLUDED.url, hit_count = EXCLUDED.hit_count
            "#,
        )
        .bind(&record.short_path)
        .bind(&record.url)
        .bind(record.hit_count)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<RedirectRecord>, StoreError> {
        let rows = sqlx::query_as::<_, RedirectRow>(
            r#"
            SELECT short_path, url, hit_count
            FROM redirects
            ORDER BY short_path
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(RedirectRecord::from).collect())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
