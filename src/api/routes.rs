//! Route configuration for the redirect endpoints.

use crate::api::handlers::{health_handler, redirect_handler, root_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Redirect and health routes.
///
/// # Endpoints
///
/// - `GET /`             - Default page redirect
/// - `GET /health`       - Store health report
/// - `GET /{*shortPath}` - Short path redirect (greedy, may contain `/`)
///
/// Other methods on these paths get 405 Method Not Allowed.
pub fn redirect_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/{*shortPath}", get(redirect_handler))
}
