//! Inbound transition requests.
//!
//! Four fixed request shapes, one per entry operation. Each is created per
//! inbound call, validated at the API boundary, consumed once, and serialized
//! verbatim when handed to the notification gateway.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Compiled msisdn shape check: optional `+`, 6 to 15 digits.
static MSISDN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[0-9]{6,15}$").unwrap());

/// Carrier-reported change to an existing subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriptionRequest {
    #[validate(length(min = 1, message = "uniqueSharedId must not be empty"))]
    pub unique_shared_id: String,

    /// Renewal flag; absent counts as not renewed.
    pub subscription_renewed: Option<bool>,

    /// Free-text carrier reason, matched against configured status patterns.
    pub reason: Option<String>,

    pub language: Option<String>,

    pub request_trx_id: Option<String>,
}

/// First-time activation of a (msisdn, shared id) pair.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionSubscriptionRequest {
    #[validate(regex(path = "*MSISDN_REGEX", message = "invalid msisdn"))]
    pub msisdn: String,

    #[validate(length(min = 1, message = "uniqueSharedId must not be empty"))]
    pub unique_shared_id: String,

    pub language: Option<String>,

    pub request_trx_id: Option<String>,
}

/// User-initiated removal of the account link.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UnlinkAccountRequest {
    #[validate(length(min = 1, message = "uniqueSharedId must not be empty"))]
    pub unique_shared_id: String,

    pub request_trx_id: Option<String>,
}

/// Carrier-side unsubscription keyed by msisdn.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UnsubscribeRequest {
    #[validate(regex(path = "*MSISDN_REGEX", message = "invalid msisdn"))]
    pub msisdn: String,

    pub user_id: Option<String>,

    pub request_trx_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_camel_case_fields() {
        let request: UpdateSubscriptionRequest = serde_json::from_value(serde_json::json!({
            "uniqueSharedId": "SHARED-1",
            "subscriptionRenewed": true,
            "reason": "USER_CANCELLED",
            "requestTrxId": "trx-9"
        }))
        .unwrap();

        assert_eq!(request.unique_shared_id, "SHARED-1");
        assert_eq!(request.subscription_renewed, Some(true));
        assert_eq!(request.request_trx_id.as_deref(), Some("trx-9"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_request_rejects_empty_shared_id() {
        let request = UpdateSubscriptionRequest {
            unique_shared_id: String::new(),
            subscription_renewed: None,
            reason: None,
            language: None,
            request_trx_id: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_provision_request_rejects_bad_msisdn() {
        let request = ProvisionSubscriptionRequest {
            msisdn: "not-a-number".to_string(),
            unique_shared_id: "SHARED-1".to_string(),
            language: None,
            request_trx_id: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_unsubscribe_request_accepts_plus_prefix() {
        let request = UnsubscribeRequest {
            msisdn: "+491700000001".to_string(),
            user_id: Some("user-1".to_string()),
            request_trx_id: None,
        };
        assert!(request.validate().is_ok());
    }
}
