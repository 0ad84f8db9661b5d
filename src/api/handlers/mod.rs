//! HTTP request handlers.

pub mod health;
pub mod subscriptions;
pub mod unsubscribe;

pub use health::health_handler;
pub use subscriptions::{
    provision_subscription_handler, unlink_account_handler, update_subscription_handler,
};
pub use unsubscribe::unsubscribe_handler;
