//! Store construction from configuration.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::RedirectRepository;
use crate::infrastructure::persistence::{PgRedirectRepository, RedisRedirectRepository};

/// Connects to the backend selected by `STORE_BACKEND`.
///
/// For PostgreSQL, pending migrations are applied when `migrate` is true.
///
/// # Errors
///
/// Returns an error if the connection, the migrations, or the Redis PING fail.
pub async fn connect(config: &Config, migrate: bool) -> Result<Arc<dyn RedirectRepository>> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let pool = connect_postgres(config).await?;

            if migrate {
                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("Failed to run migrations")?;
                tracing::info!("Migrations applied");
            }

            Ok(Arc::new(PgRedirectRepository::new(Arc::new(pool))))
        }
        StoreBackend::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL must be set when STORE_BACKEND=redis")?;

            let repository = RedisRedirectRepository::connect(redis_url)
                .await
                .context("Failed to connect to Redis")?;

            Ok(Arc::new(repository))
        }
    }
}

async fn connect_postgres(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set when STORE_BACKEND=postgres")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}
