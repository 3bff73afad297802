//! Short path resolution service.

use std::sync::Arc;

use tracing::info;

use crate::domain::repositories::RedirectRepository;
use crate::domain::request::RedirectRequest;
use crate::domain::route::{Resolution, Route};
use crate::error::StoreError;

/// Resolves requests to redirect targets and counts hits.
///
/// Stateless between calls: every resolution re-reads the store.
pub struct RedirectService {
    repository: Arc<dyn RedirectRepository>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<dyn RedirectRepository>) -> Self {
        Self { repository }
    }

    /// Resolves a request.
    ///
    /// # Flow
    ///
    /// 1. No short path: default page, no store access
    /// 2. `cat<code>`: status-image service, no store access
    /// 3. Otherwise read the record. On a hit, write it back with
    ///    `hit_count + 1` and redirect to its url; on a miss, fall back to search
    ///
    /// The read and the write are independent calls with no lock held in
    /// between.
    ///
    /// # Errors
    ///
    /// Store faults are returned as-is. There is no retry and no fallback redirect.
    pub async fn resolve(&self, request: &RedirectRequest) -> Result<Resolution, StoreError> {
        let resolution = match Route::classify(request.short_path()) {
            Route::Default => {
                info!("No short path, defaulting to the home page");
                Resolution::Default
            }
            Route::StatusCat { code } => {
                info!("Redirecting to status image: {}", code);
                Resolution::StatusCat {
                    code: code.to_string(),
                }
            }
            Route::Lookup { path } => self.lookup(path).await?,
        };

        Ok(resolution)
    }

    async fn lookup(&self, path: &str) -> Result<Resolution, StoreError> {
        let Some(record) = self.repository.get(path).await? else {
            info!("Unknown short path, bailing out to search: {}", path);
            return Ok(Resolution::Miss {
                path: path.to_string(),
            });
        };

        let record = record.hit();
        self.repository.put(&record).await?;

        info!("Redirecting: {} (hits: {})", path, record.hit_count);
        Ok(Resolution::Hit { record })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RedirectRecord;
    use crate::domain::repositories::MockRedirectRepository;
    use mockall::Sequence;
    use mockall::predicate::eq;

    fn service(repo: MockRedirectRepository) -> RedirectService {
        RedirectService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_default_without_container() {
        let mut repo = MockRedirectRepository::new();
        repo.expect_get().never();
        repo.expect_put().never();

        let resolution = service(repo)
            .resolve(&RedirectRequest::empty())
            .await
            .unwrap();

        assert_eq!(resolution, Resolution::Default);
        assert_eq!(resolution.location(), "https://www.google.co.uk");
    }

    #[tokio::test]
    async fn test_default_with_empty_short_path() {
        let mut repo = MockRedirectRepository::new();
        repo.expect_get().never();

        let resolution = service(repo)
            .resolve(&RedirectRequest::with_short_path(""))
            .await
            .unwrap();

        assert_eq!(resolution, Resolution::Default);
    }

    #[tokio::test]
    async fn test_status_cat_skips_store() {
        let mut repo = MockRedirectRepository::new();
        repo.expect_get().never();
        repo.expect_put().never();

        let resolution = service(repo)
            .resolve(&RedirectRequest::with_short_path("cat404"))
            .await
            .unwrap();

        assert_eq!(resolution.location(), "https://http.cat/status/404");
    }

    #[tokio::test]
    async fn test_bare_cat_falls_through_to_store() {
        let mut repo = MockRedirectRepository::new();
        repo.expect_get()
            .with(eq("cat"))
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_put().never();

        let resolution = service(repo)
            .resolve(&RedirectRequest::with_short_path("cat"))
            .await
            .unwrap();

        assert_eq!(
            resolution.location(),
            "https://www.google.co.uk/search?q=cat"
        );
    }

    #[tokio::test]
    async fn test_miss_falls_back_to_search() {
        let mut repo = MockRedirectRepository::new();
        repo.expect_get()
            .with(eq("xyz"))
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_put().never();

        let resolution = service(repo)
            .resolve(&RedirectRequest::with_short_path("xyz"))
            .await
            .unwrap();

        assert_eq!(
            resolution,
            Resolution::Miss {
                path: "xyz".to_string()
            }
        );
        assert_eq!(
            resolution.location(),
            "https://www.google.co.uk/search?q=xyz"
        );
    }

    #[tokio::test]
    async fn test_hit_reads_then_writes_incremented_record() {
        let mut repo = MockRedirectRepository::new();
        let mut seq = Sequence::new();

        repo.expect_get()
            .with(eq("ex"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some(RedirectRecord::new("ex", "example.com", 41))));
        repo.expect_put()
            .withf(|record| *record == RedirectRecord::new("ex", "example.com", 42))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let resolution = service(repo)
            .resolve(&RedirectRequest::with_short_path("ex"))
            .await
            .unwrap();

        assert_eq!(resolution.location(), "https://example.com");
    }

    #[tokio::test]
    async fn test_hit_with_scheme_is_unchanged() {
        let mut repo = MockRedirectRepository::new();
        repo.expect_get()
            .returning(|_| Ok(Some(RedirectRecord::new("ex", "http://example.com", 0))));
        repo.expect_put()
            .withf(|record| record.url == "http://example.com" && record.hit_count == 1)
            .times(1)
            .returning(|_| Ok(()));

        let resolution = service(repo)
            .resolve(&RedirectRequest::with_short_path("ex"))
            .await
            .unwrap();

        assert_eq!(resolution.location(), "http://example.com");
    }

    #[tokio::test]
    async fn test_read_failure_propagates_without_write() {
        let mut repo = MockRedirectRepository::new();
        repo.expect_get().returning(|path| {
            Err(StoreError::Corrupt {
                short_path: path.to_string(),
                reason: "unreadable".to_string(),
            })
        });
        repo.expect_put().never();

        let result = service(repo)
            .resolve(&RedirectRequest::with_short_path("broken"))
            .await;

        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }

    #[tokio::test]
    async fn test_write_failure_propagates() {
        let mut repo = MockRedirectRepository::new();
        repo.expect_get()
            .returning(|_| Ok(Some(RedirectRecord::new("ex", "example.com", 0))));
        repo.expect_put().returning(|record| {
            Err(StoreError::Corrupt {
                short_path: record.short_path.clone(),
                reason: "write rejected".to_string(),
            })
        });

        let result = service(repo)
            .resolve(&RedirectRequest::with_short_path("ex"))
            .await;

        assert!(result.is_err());
    }
}
