//! Repository trait for account link lookups.

use async_trait::async_trait;

use crate::domain::entities::AccountLink;
use crate::error::AppError;

/// Read-only access to the identity store.
///
/// The orchestration never writes links; it only resolves them by shared id
/// or msisdn.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAccountLinkRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountLinkRepository: Send + Sync {
    /// Finds a link by its external shared id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn find_by_shared_id(&self, shared_id: &str) -> Result<Option<AccountLink>, AppError>;

    /// Finds a link by the exact (msisdn, shared id) pair.
    ///
    /// Used by provision to verify the combination exists before activating.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn find_by_msisdn_and_shared_id(
        &self,
        msisdn: &str,
        shared_id: &str,
    ) -> Result<Option<AccountLink>, AppError>;

    /// Finds a link by msisdn alone.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn find_by_msisdn(&self, msisdn: &str) -> Result<Option<AccountLink>, AppError>;
}
