//! Notification value objects derived from a classified transition.

use serde::Serialize;

use crate::error::{AppError, DomainError};

/// Which lifecycle transition a notification announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    Activation,
    SelfDeactivation,
    Disconnection,
}

/// Renewal cadence derived from the configured billing period code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingPeriod {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl BillingPeriod {
    /// Maps a configured code onto a cadence.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] for unknown codes. Callers invoke
    /// this at intent-build time so a bad configuration fails before any
    /// dispatch happens.
    pub fn from_code(code: &str) -> Result<Self, AppError> {
        match code.to_ascii_uppercase().as_str() {
            "DAILY" => Ok(Self::Daily),
            "WEEKLY" => Ok(Self::Weekly),
            "MONTHLY" => Ok(Self::Monthly),
            "YEARLY" => Ok(Self::Yearly),
            _ => Err(AppError::Configuration(format!(
                "unknown billing period code '{code}'"
            ))),
        }
    }
}

/// Payload handed to the notification gateway.
///
/// Built fresh per transition and never mutated after construction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationIntent {
    pub msisdn: String,
    pub unique_shared_id: String,
    pub user_id: String,
    pub notification_type: NotificationKind,
    pub billing_period_type: BillingPeriod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Result of running an identity-bound transition to completion.
///
/// Update and unlink flows are infallible from the caller's perspective;
/// everything they can fail on is captured here and assembled into a
/// FAILED envelope downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    DomainFailure(DomainError),
    UnexpectedFailure(String),
}

impl From<Result<(), AppError>> for DeliveryOutcome {
    fn from(result: Result<(), AppError>) -> Self {
        match result {
            Ok(()) => Self::Delivered,
            Err(AppError::Domain(domain)) => Self::DomainFailure(domain),
            Err(other) => Self::UnexpectedFailure(other.reason()),
        }
    }
}
