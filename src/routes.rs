//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`             - Default page redirect
//! - `GET  /health`       - Health check
//! - `GET  /{*shortPath}` - Short path redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//!
//! Paths are not normalized: `gh/` and `gh` are different short paths.

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    api::routes::redirect_routes()
        .with_state(state)
        .layer(tracing::layer())
}
