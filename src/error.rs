//! Application error types and HTTP error rendering.
//!
//! Errors are split into classified domain failures ([`DomainError`]), which
//! carry a stable label used in FAILED response envelopes, and everything
//! else, which only surfaces as a message. Update and unlink flows capture
//! both kinds into an envelope; provision and unsubscribe let some errors
//! reach the transport boundary, where [`IntoResponse`] renders them.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Classified business-rule failures with stable wire labels.
///
/// `Display` renders the label carried in FAILED envelopes and error bodies,
/// so the rendering must stay stable across refactors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// No account link exists for the given shared id.
    #[error("USER_NOT_FOUND")]
    UserNotFound,

    /// No account link matches the (msisdn, shared id) pair.
    #[error("UNIQUE_COMBINATION_NOT_FOUND")]
    UniqueCombinationNotFound {
        unique_shared_id: String,
        msisdn: String,
    },

    /// The msisdn resolves to no link, or to a link without a shared id.
    #[error("INVALID_SUBSCRIBER")]
    InvalidSubscriber { msisdn: String },
}

/// Top-level error type for all fallible operations in the service.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("delivery failed: {0}")]
    Delivery(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unexpected(String),
}

impl AppError {
    /// Label placed in the `reason` field of a FAILED envelope.
    ///
    /// Domain errors contribute their stable label; every other error
    /// contributes its raw message.
    pub fn reason(&self) -> String {
        match self {
            Self::Domain(domain) => domain.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::Delivery(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Domain(DomainError::UserNotFound)
            | AppError::Domain(DomainError::UniqueCombinationNotFound { .. }) => {
                (StatusCode::NOT_FOUND, "not_found")
            }
            AppError::Domain(DomainError::InvalidSubscriber { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_subscriber")
            }
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::Database(_)
            | AppError::Delivery(_)
            | AppError::Configuration(_)
            | AppError::Unexpected(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code: code.to_string(),
                message: self.reason(),
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_labels() {
        assert_eq!(DomainError::UserNotFound.to_string(), "USER_NOT_FOUND");
        assert_eq!(
            DomainError::UniqueCombinationNotFound {
                unique_shared_id: "S1".to_string(),
                msisdn: "491700000001".to_string(),
            }
            .to_string(),
            "UNIQUE_COMBINATION_NOT_FOUND"
        );
        assert_eq!(
            DomainError::InvalidSubscriber {
                msisdn: "491700000001".to_string(),
            }
            .to_string(),
            "INVALID_SUBSCRIBER"
        );
    }

    #[test]
    fn test_reason_uses_label_for_domain_errors() {
        let err = AppError::Domain(DomainError::UserNotFound);
        assert_eq!(err.reason(), "USER_NOT_FOUND");
    }

    #[test]
    fn test_reason_uses_message_for_unexpected_errors() {
        let err = AppError::Unexpected("boom".to_string());
        assert_eq!(err.reason(), "boom");
    }

    #[test]
    fn test_delivery_reason_keeps_context() {
        let err = AppError::Delivery("connection refused".to_string());
        assert_eq!(err.reason(), "delivery failed: connection refused");
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_subscriber_renders_422() {
        let err = AppError::Domain(DomainError::InvalidSubscriber {
            msisdn: "491700000001".to_string(),
        });
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "invalid_subscriber");
        assert_eq!(json["error"]["message"], "INVALID_SUBSCRIBER");
    }

    #[tokio::test]
    async fn test_unique_combination_not_found_renders_404() {
        let err = AppError::Domain(DomainError::UniqueCombinationNotFound {
            unique_shared_id: "S1".to_string(),
            msisdn: "491700000001".to_string(),
        });
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "not_found");
        assert_eq!(json["error"]["message"], "UNIQUE_COMBINATION_NOT_FOUND");
    }
}
