//! Gateway trait for subscriber profile lookups.

use async_trait::async_trait;

use crate::domain::entities::{AccountStatus, UserProfile};
use crate::error::AppError;

/// Resolves subscriber profiles and account status from the identity
/// platform.
///
/// Absence of a profile is a regular `None`, not an error: provision
/// proceeds with an empty user id in that case.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpProfileResolver`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileResolver: Send + Sync {
    /// Checks eligibility of an msisdn and resolves its profile.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Delivery`] when the identity platform is
    /// unreachable.
    async fn check_eligibility(&self, msisdn: &str) -> Result<Option<UserProfile>, AppError>;

    /// Resolves the account status for a user id. An empty user id yields
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Delivery`] when the identity platform is
    /// unreachable.
    async fn account_status(&self, user_id: &str) -> Result<Option<AccountStatus>, AppError>;
}
