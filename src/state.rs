//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::RedirectService;
use crate::domain::repositories::RedirectRepository;

#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService>,
    /// Same store the service uses; kept for health checks.
    pub repository: Arc<dyn RedirectRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn RedirectRepository>) -> Self {
        Self {
            redirect_service: Arc::new(RedirectService::new(repository.clone())),
            repository,
        }
    }
}
