//! Gateway trait for carrier-side unsubscription.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::requests::UnsubscribeRequest;
use crate::error::AppError;

/// Acknowledgement returned by the unsubscription collaborator.
///
/// The attempt counts as successful only when `error` is absent; a populated
/// error field is recorded in the audit trail without raising.
#[derive(Debug, Clone, Deserialize)]
pub struct UnsubscribeAck {
    pub error: Option<String>,
}

/// Forwards an unsubscribe request to the external collaborator.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpUnsubscribeGateway`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UnsubscribeGateway: Send + Sync {
    /// Performs the unsubscription for a resolved shared id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Delivery`] when the collaborator is unreachable.
    /// A reachable collaborator reporting a business failure responds with
    /// an [`UnsubscribeAck`] carrying an error field instead.
    async fn unsubscribe(
        &self,
        request: &UnsubscribeRequest,
        shared_id: &str,
    ) -> Result<UnsubscribeAck, AppError>;
}
