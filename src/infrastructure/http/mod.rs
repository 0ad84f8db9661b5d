//! HTTP implementations of the domain gateway traits.
//!
//! All gateways share one `reqwest::Client` configured with the outbound
//! timeout from [`crate::config::Config`].

pub mod notification_gateway;
pub mod profile_resolver;
pub mod unsubscribe_gateway;

pub use notification_gateway::HttpNotificationGateway;
pub use profile_resolver::HttpProfileResolver;
pub use unsubscribe_gateway::HttpUnsubscribeGateway;
