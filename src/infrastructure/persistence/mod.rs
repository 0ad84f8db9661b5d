//! PostgreSQL implementations of the domain repository traits.

pub mod pg_account_link_repository;
pub mod pg_audit_repository;

pub use pg_account_link_repository::PgAccountLinkRepository;
pub use pg_audit_repository::PgAuditRepository;
