//! Application layer services implementing the orchestration logic.
//!
//! Services consume the domain traits and run each transition to
//! completion: lookup, classification, dispatch, and outcome capture. They
//! provide a clean API for the HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::subscription_service::SubscriptionService`] - update, provision, unlink
//! - [`services::unsubscribe_service::UnsubscribeService`] - unsubscribe with guaranteed audit finalization

pub mod services;
