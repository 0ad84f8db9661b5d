//! HTTP implementation of the notification gateway.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::gateways::NotificationGateway;
use crate::domain::notification::NotificationIntent;
use crate::error::AppError;

/// Delivers notifications to the downstream processor over HTTP.
///
/// One POST per dispatch; the caller awaits the full round trip.
pub struct HttpNotificationGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpNotificationGateway {
    /// Creates a gateway targeting the given base URL.
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NotificationEnvelope<'a> {
    source_method: &'a str,
    source_path: &'a str,
    carrier: &'a str,
    country: &'a str,
    user_id: &'a str,
    notification: &'a NotificationIntent,
    original_request: &'a str,
}

#[async_trait]
impl NotificationGateway for HttpNotificationGateway {
    async fn deliver(
        &self,
        http_method: &str,
        context_path: &str,
        intent: &NotificationIntent,
        carrier: &str,
        country: &str,
        user_id: &str,
        original_request: &str,
    ) -> Result<(), AppError> {
        let envelope = NotificationEnvelope {
            source_method: http_method,
            source_path: context_path,
            carrier,
            country,
            user_id,
            notification: intent,
            original_request,
        };

        let url = format!("{}/notifications", self.base_url);
        tracing::debug!(%url, kind = ?intent.notification_type, "delivering notification");

        self.client
            .post(&url)
            .json(&envelope)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
