//! Infrastructure layer: database and outbound HTTP integrations.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`http`] - reqwest gateway implementations

pub mod http;
pub mod persistence;
