//! Data Transfer Objects for response serialization.
//!
//! Request shapes live in [`crate::domain::requests`]; this module holds the
//! response assemblers.

pub mod health;
pub mod subscription;
pub mod unsubscribe;

pub use subscription::{ResponseStatus, SubscriptionResponse};
pub use unsubscribe::UnsubscribeResponse;
