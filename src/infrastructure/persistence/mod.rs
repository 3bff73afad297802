//! Redirect repository implementations.
//!
//! # Repositories
//!
//! - [`PgRedirectRepository`] - PostgreSQL `redirects` table via SQLx
//! - [`RedisRedirectRepository`] - Redis hashes via `ConnectionManager`

pub mod pg_redirect_repository;
pub mod redis_redirect_repository;

pub use pg_redirect_repository::PgRedirectRepository;
pub use redis_redirect_repository::RedisRedirectRepository;
