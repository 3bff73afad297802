//! Application layer services.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers
//! and the admin tool.
//!
//! # Available Services
//!
//! - [`services::redirect_service::RedirectService`] - Short path resolution and hit counting

pub mod services;
