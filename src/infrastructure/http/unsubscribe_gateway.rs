//! HTTP implementation of the unsubscribe gateway.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::gateways::{UnsubscribeAck, UnsubscribeGateway};
use crate::domain::requests::UnsubscribeRequest;
use crate::error::AppError;

/// Forwards unsubscribe requests to the external collaborator over HTTP.
pub struct HttpUnsubscribeGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUnsubscribeGateway {
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
struct UnsubscribePayload<'a> {
    #[serde(flatten)]
    request: &'a UnsubscribeRequest,
    unique_shared_id: &'a str,
}

#[async_trait]
impl UnsubscribeGateway for HttpUnsubscribeGateway {
    async fn unsubscribe(
        &self,
        request: &UnsubscribeRequest,
        shared_id: &str,
    ) -> Result<UnsubscribeAck, AppError> {
        let url = format!("{}/unsubscriptions", self.base_url);
        tracing::debug!(%url, msisdn = %request.msisdn, "forwarding unsubscribe");

        let ack = self
            .client
            .post(&url)
            .json(&UnsubscribePayload {
                request,
                unique_shared_id: shared_id,
            })
            .send()
            .await?
            .error_for_status()?
            .json::<UnsubscribeAck>()
            .await?;

        Ok(ack)
    }
}
