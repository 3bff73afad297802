//! Domain layer containing business entities and routing rules.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`request`] - Typed view of an incoming request
//! - [`route`] - Pure routing decisions and redirect targets
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod entities;
pub mod repositories;
pub mod request;
pub mod route;
