#![allow(dead_code)]

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use url_redirector::domain::entities::RedirectRecord;
use url_redirector::domain::repositories::RedirectRepository;
use url_redirector::error::StoreError;
use url_redirector::infrastructure::persistence::PgRedirectRepository;
use url_redirector::routes::app_router;
use url_redirector::state::AppState;

pub async fn create_test_redirect(pool: &PgPool, short_path: &str, url: &str, hit_count: i64) {
    sqlx::query("INSERT INTO redirects (short_path, url, hit_count) VALUES ($1, $2, $3)")
        .bind(short_path)
        .bind(url)
        .bind(hit_count)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn hit_count(pool: &PgPool, short_path: &str) -> i64 {
    sqlx::query_scalar("SELECT hit_count FROM redirects WHERE short_path = $1")
        .bind(short_path)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn redirect_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM redirects")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let repository = Arc::new(PgRedirectRepository::new(Arc::new(pool)));
    AppState::new(repository)
}

pub fn create_test_app(pool: PgPool) -> axum::Router {
    app_router(create_test_state(pool))
}

/// Store whose every call fails, for exercising the fault path without a database.
pub struct FailingStore;

impl FailingStore {
    fn error(short_path: &str) -> StoreError {
        StoreError::Corrupt {
            short_path: short_path.to_string(),
            reason: "store unavailable".to_string(),
        }
    }
}

#[async_trait]
impl RedirectRepository for FailingStore {
    async fn get(&self, short_path: &str) -> Result<Option<RedirectRecord>, StoreError> {
        Err(Self::error(short_path))
    }

    async fn put(&self, record: &RedirectRecord) -> Result<(), StoreError> {
        Err(Self::error(&record.short_path))
    }

    async fn list(&self) -> Result<Vec<RedirectRecord>, StoreError> {
        Err(Self::error(""))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_failing_app() -> axum::Router {
    app_router(AppState::new(Arc::new(FailingStore)))
}
