//! REST API layer for HTTP request/response handling.
//!
//! This layer validates inbound payloads, invokes the application services,
//! and assembles the response envelopes.
//!
//! # Modules
//!
//! - [`dto`] - response envelopes and their assemblers
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - request tracing middleware
//! - [`routes`] - route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
