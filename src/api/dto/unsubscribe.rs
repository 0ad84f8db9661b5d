//! Response envelope for the unsubscribe flow.

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::requests::UnsubscribeRequest;

/// Envelope echoing the unsubscribe request with fresh correlation data.
///
/// Returned for every non-raising outcome; delivery failure is recorded only
/// in the audit trail, never in this shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsubscribeResponse {
    pub operator_reference_id: Option<String>,
    pub msisdn: String,
    pub user_id: Option<String>,
    pub correlation_id: String,
    pub request_trx_id: Option<String>,
    /// Epoch milliseconds of response assembly.
    pub unsubscription_date: i64,
}

impl UnsubscribeResponse {
    /// Assembles the envelope for an accepted unsubscribe request.
    pub fn for_request(request: &UnsubscribeRequest) -> Self {
        Self {
            operator_reference_id: None,
            msisdn: request.msisdn.clone(),
            user_id: request.user_id.clone(),
            correlation_id: Uuid::new_v4().to_string(),
            request_trx_id: request.request_trx_id.clone(),
            unsubscription_date: Utc::now().timestamp_millis(),
        }
    }
}
