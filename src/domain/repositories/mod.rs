//! Repository trait definitions for the domain layer.
//!
//! Traits define the data-access contract; concrete implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`AccountLinkRepository`] - identity store lookups
//! - [`AuditRepository`] - unsubscribe audit trail

pub mod account_link_repository;
pub mod audit_repository;

pub use account_link_repository::AccountLinkRepository;
pub use audit_repository::AuditRepository;

#[cfg(test)]
pub use account_link_repository::MockAccountLinkRepository;
#[cfg(test)]
pub use audit_repository::MockAuditRepository;
