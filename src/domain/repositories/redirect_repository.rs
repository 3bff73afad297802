//! Repository trait for redirect record access.

use crate::domain::entities::RedirectRecord;
use crate::error::StoreError;
use async_trait::async_trait;

/// Key-value store holding redirect records, keyed by short path.
///
/// Implementations make no atomicity promises across calls. The resolver does
/// a plain `get` followed by `put`, so concurrent hits on the same key can
/// lose increments.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRedirectRepository`] - PostgreSQL table `redirects`
/// - [`crate::infrastructure::persistence::RedisRedirectRepository`] - Redis hashes
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectRepository: Send + Sync {
    /// Reads the record for a short path.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` on a hit
    /// - `Ok(None)` on a miss
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails or the stored record is unreadable.
    async fn get(&self, short_path: &str) -> Result<Option<RedirectRecord>, StoreError>;

    /// Writes the full record, replacing whatever is stored under its short path.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    async fn put(&self, record: &RedirectRecord) -> Result<(), StoreError>;

    /// Lists every record ordered by short path. Used by the admin tool.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    async fn list(&self) -> Result<Vec<RedirectRecord>, StoreError>;

    /// Checks if the backend answers.
    async fn health_check(&self) -> bool;
}
