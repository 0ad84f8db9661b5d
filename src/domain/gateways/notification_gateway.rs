//! Gateway trait for synchronous notification delivery.

use async_trait::async_trait;

use crate::domain::notification::NotificationIntent;
use crate::error::AppError;

/// Delivers lifecycle notifications to the downstream processor.
///
/// Delivery is awaited to completion before the calling operation returns;
/// exactly one call happens per update/provision/unlink invocation. The
/// original inbound request travels along in serialized form for downstream
/// correlation.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpNotificationGateway`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Delivers one notification.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Delivery`] when the downstream processor is
    /// unreachable or rejects the notification.
    #[allow(clippy::too_many_arguments)]
    async fn deliver(
        &self,
        http_method: &str,
        context_path: &str,
        intent: &NotificationIntent,
        carrier: &str,
        country: &str,
        user_id: &str,
        original_request: &str,
    ) -> Result<(), AppError>;
}
