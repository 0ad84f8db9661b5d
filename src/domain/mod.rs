//! Domain layer containing business entities and lifecycle logic.
//!
//! # Architecture
//!
//! - [`entities`] - core business data structures
//! - [`requests`] - the four inbound transition request shapes
//! - [`classifier`] - pure lifecycle classification
//! - [`notification`] - notification intent and outcome value objects
//! - [`repositories`] - data access trait definitions
//! - [`gateways`] - outbound collaborator trait definitions
//!
//! # Design Principles
//!
//! - The domain layer has no dependency on infrastructure or the API layer
//! - Traits define contracts implemented by the infrastructure layer
//! - Orchestration lives in [`crate::application::services`]

pub mod classifier;
pub mod entities;
pub mod gateways;
pub mod notification;
pub mod repositories;
pub mod requests;
