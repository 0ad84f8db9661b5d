//! Business logic services for the application layer.

pub mod subscription_service;
pub mod unsubscribe_service;

pub use subscription_service::SubscriptionService;
pub use unsubscribe_service::UnsubscribeService;
