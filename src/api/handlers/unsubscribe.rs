//! Handler for the unsubscribe operation.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::UnsubscribeResponse;
use crate::domain::requests::UnsubscribeRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Processes a carrier-side unsubscription.
///
/// # Endpoint
///
/// `POST /api/subscriptions/unsubscribe`
///
/// The audit record is finalized exactly once before any error leaves the
/// service. A 200 response does not imply the downstream delivery
/// succeeded; only the audit trail records that.
///
/// # Errors
///
/// Renders 422 when the msisdn does not resolve to a valid subscriber, and
/// 500 for storage or delivery transport failures.
pub async fn unsubscribe_handler(
    State(state): State<AppState>,
    Json(payload): Json<UnsubscribeRequest>,
) -> Result<Json<UnsubscribeResponse>, AppError> {
    payload.validate()?;

    state.unsubscribes.unsubscribe(&payload).await?;

    Ok(Json(UnsubscribeResponse::for_request(&payload)))
}
