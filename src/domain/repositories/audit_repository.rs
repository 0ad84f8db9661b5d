//! Repository trait for unsubscribe audit records.

use async_trait::async_trait;

use crate::domain::entities::{ProcessedStatus, UnsubscribeAudit};
use crate::domain::requests::UnsubscribeRequest;
use crate::error::AppError;

/// Persistence for the unsubscribe audit trail.
///
/// `create_pending` runs before any lookup or delivery; `finalize` must be
/// called exactly once per created record, whatever happens in between.
/// There is no dedup key: repeated attempts create repeated rows.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAuditRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditRepository: Send + Sync {
    /// Inserts a new audit row in `Pending` state and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn create_pending(
        &self,
        request: &UnsubscribeRequest,
    ) -> Result<UnsubscribeAudit, AppError>;

    /// Sets the final status and processing timestamp of an audit row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn finalize(&self, audit_id: i64, status: ProcessedStatus) -> Result<(), AppError>;
}
