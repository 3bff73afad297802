//! Redis implementation of the redirect repository.

use std::collections::HashMap;

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::entities::RedirectRecord;
use crate::domain::repositories::RedirectRepository;
use crate::error::StoreError;

const FIELD_URL: &str = "url";
const FIELD_HIT_COUNT: &str = "hitCount";

/// Redis repository storing one hash per record.
///
/// Layout: key `redirects:<shortPath>`, fields `url` and `hitCount`.
/// Uses `ConnectionManager` for connection reuse and automatic reconnects.
pub struct RedisRedirectRepository {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisRedirectRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Redis`] if the URL is invalid, the connection cannot
    /// be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: "redirects:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, short_path: &str) -> String {
        format!("{}{}", self.key_prefix, short_path)
    }

    /// `DEL` + `HSET` in one `MULTI`/`EXEC`, so no stale field outlives a write.
    fn put_pipeline(key: &str, record: &RedirectRecord) -> redis::Pipeline {
        let mut pipe = redis::pipe();
        pipe.atomic()
            .del(key)
            .ignore()
            .hset_multiple(
                key,
                &[
                    (FIELD_URL, record.url.clone()),
                    (FIELD_HIT_COUNT, record.hit_count.to_string()),
                ],
            )
            .ignore();
        pipe
    }

    fn record_from_hash(
        short_path: &str,
        mut fields: HashMap<String, String>,
    ) -> Result<RedirectRecord, StoreError> {
        let corrupt = |reason: String| StoreError::Corrupt {
            short_path: short_path.to_string(),
            reason,
        };

        let url = fields
            .remove(FIELD_URL)
            .ok_or_else(|| corrupt(format!("missing field '{FIELD_URL}'")))?;

        let hit_count = match fields.remove(FIELD_HIT_COUNT) {
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|n| *n >= 0)
                .ok_or_else(|| corrupt(format!("invalid {FIELD_HIT_COUNT} '{raw}'")))?,
            None => 0,
        };

        Ok(RedirectRecord::new(short_path, url, hit_count))
    }
}

#[async_trait]
impl RedirectRepository for RedisRedirectRepository {
    async fn get(&self, short_path: &str) -> Result<Option<RedirectRecord>, StoreError> {
        let key = self.build_key(short_path);
        let mut conn = self.client.clone();

        let fields: HashMap<String, String> = conn.hgetall(&key).await?;
        if fields.is_empty() {
            debug!("Redis MISS: {}", key);
            return Ok(None);
        }

        Self::record_from_hash(short_path, fields).map(Some)
    }

    async fn put(&self, record: &RedirectRecord) -> Result<(), StoreError> {
        let key = self.build_key(&record.short_path);
        let mut conn = self.client.clone();

        Self::put_pipeline(&key, record)
            .query_async::<()>(&mut conn)
            .await?;

        debug!("Redis PUT: {} (hits: {})", key, record.hit_count);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<RedirectRecord>, StoreError> {
        let mut conn = self.client.clone();
        let pattern = format!("{}*", self.key_prefix);

        // KEYS blocks the server while it runs; only the admin tool calls this.
        let mut keys: Vec<String> = conn.keys(&pattern).await?;
        keys.sort();

        let mut records = Vec::with_capacity(keys.len());
        for key in keys {
            let short_path = &key[self.key_prefix.len()..];
            let fields: HashMap<String, String> = conn.hgetall(&key).await?;
            if !fields.is_empty() {
                records.push(Self::record_from_hash(short_path, fields)?);
            }
        }

        Ok(records)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
