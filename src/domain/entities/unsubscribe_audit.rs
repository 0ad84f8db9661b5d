//! Audit record for unsubscribe attempts.

use chrono::{DateTime, Utc};

/// Final state of an unsubscribe attempt.
///
/// Every attempt starts `Pending` and is finalized to `Success` or `Error`
/// exactly once, on every control path including raised errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessedStatus {
    Pending,
    Success,
    Error,
}

impl ProcessedStatus {
    /// Storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Success => "SUCCESS",
            Self::Error => "ERROR",
        }
    }

    /// Parses a stored value. Unknown values collapse to `Error` so a
    /// corrupted row never reads back as a success.
    pub fn from_db(value: &str) -> Self {
        match value {
            "PENDING" => Self::Pending,
            "SUCCESS" => Self::Success,
            _ => Self::Error,
        }
    }
}

impl std::fmt::Display for ProcessedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted record of a single unsubscribe attempt.
///
/// Attempts are not deduplicated: two calls for the same msisdn produce
/// two rows.
#[derive(Debug, Clone)]
pub struct UnsubscribeAudit {
    pub id: i64,
    pub msisdn: String,
    pub user_id: Option<String>,
    pub request_trx_id: Option<String>,
    pub status: ProcessedStatus,
    pub created_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
}
