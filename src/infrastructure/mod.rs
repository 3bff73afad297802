//! Infrastructure layer for external integrations.
//!
//! Implements the repository traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and Redis repository implementations
//! - [`store`] - Backend selection and connection setup

pub mod persistence;
pub mod store;
