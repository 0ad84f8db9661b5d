//! Read-only payloads returned by the profile collaborator.

use serde::Deserialize;

/// Subscriber profile resolved during the provision eligibility check.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub msisdn: Option<String>,
}

/// Account status for a known user id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountStatus {
    pub account_status: String,
}
