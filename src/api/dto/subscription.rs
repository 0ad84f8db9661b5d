//! Response envelope for the update/provision/unlink flows.

use serde::Serialize;

use crate::domain::notification::DeliveryOutcome;

/// Wire status of a subscription transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResponseStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "FAILED")]
    Failed,
}

/// Uniform envelope returned by the three identity-bound operations.
///
/// `reason` carries the domain error label or the raw failure message and is
/// omitted on success.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionResponse {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl SubscriptionResponse {
    pub fn ok() -> Self {
        Self {
            status: ResponseStatus::Ok,
            reason: None,
        }
    }

    pub fn failed(reason: String) -> Self {
        Self {
            status: ResponseStatus::Failed,
            reason: Some(reason),
        }
    }

    /// Assembles the envelope from a captured delivery outcome.
    pub fn from_outcome(outcome: DeliveryOutcome) -> Self {
        match outcome {
            DeliveryOutcome::Delivered => Self::ok(),
            DeliveryOutcome::DomainFailure(domain) => Self::failed(domain.to_string()),
            DeliveryOutcome::UnexpectedFailure(message) => Self::failed(message),
        }
    }
}
