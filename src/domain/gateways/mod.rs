//! Gateway trait definitions for outbound collaborators.
//!
//! Like the repository traits, these define contracts implemented in
//! `crate::infrastructure::http`, with `mockall` mocks for unit tests.
//!
//! # Available Gateways
//!
//! - [`NotificationGateway`] - synchronous notification delivery
//! - [`UnsubscribeGateway`] - carrier-side unsubscription
//! - [`ProfileResolver`] - subscriber profile and account status lookups

pub mod notification_gateway;
pub mod profile_resolver;
pub mod unsubscribe_gateway;

pub use notification_gateway::NotificationGateway;
pub use profile_resolver::ProfileResolver;
pub use unsubscribe_gateway::{UnsubscribeAck, UnsubscribeGateway};

#[cfg(test)]
pub use notification_gateway::MockNotificationGateway;
#[cfg(test)]
pub use profile_resolver::MockProfileResolver;
#[cfg(test)]
pub use unsubscribe_gateway::MockUnsubscribeGateway;
