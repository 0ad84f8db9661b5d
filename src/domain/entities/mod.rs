//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without orchestration logic:
//!
//! - [`AccountLink`] - identity store record linking msisdn, shared id, and user
//! - [`UnsubscribeAudit`] / [`ProcessedStatus`] - audit trail of unsubscribe attempts
//! - [`UserProfile`] / [`AccountStatus`] - read-only collaborator payloads

pub mod account_link;
pub mod profile;
pub mod unsubscribe_audit;

pub use account_link::AccountLink;
pub use profile::{AccountStatus, UserProfile};
pub use unsubscribe_audit::{ProcessedStatus, UnsubscribeAudit};
