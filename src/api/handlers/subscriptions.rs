//! Handlers for the identity-bound subscription operations.

use axum::{
    Json,
    extract::State,
    http::{Method, Uri},
};
use validator::Validate;

use crate::api::dto::SubscriptionResponse;
use crate::domain::requests::{
    ProvisionSubscriptionRequest, UnlinkAccountRequest, UpdateSubscriptionRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Applies a carrier-reported subscription update.
///
/// # Endpoint
///
/// `PUT /api/subscriptions`
///
/// Always answers 200 with an `{status, reason?}` envelope; lookup misses
/// and delivery failures surface as `FAILED` with a reason label, never as
/// an HTTP error.
pub async fn update_subscription_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    Json(payload): Json<UpdateSubscriptionRequest>,
) -> Result<Json<SubscriptionResponse>, AppError> {
    payload.validate()?;

    let outcome = state
        .subscriptions
        .update_subscription(method.as_str(), uri.path(), &payload)
        .await;

    Ok(Json(SubscriptionResponse::from_outcome(outcome)))
}

/// Provisions a new (msisdn, shared id) combination.
///
/// # Endpoint
///
/// `POST /api/subscriptions`
///
/// # Errors
///
/// Unlike update and unlink, an unknown combination is raised and rendered
/// as 404 by [`AppError::into_response`]; it is not wrapped into a FAILED
/// envelope.
pub async fn provision_subscription_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    Json(payload): Json<ProvisionSubscriptionRequest>,
) -> Result<Json<SubscriptionResponse>, AppError> {
    payload.validate()?;

    let outcome = state
        .subscriptions
        .provision_subscription(method.as_str(), uri.path(), &payload)
        .await?;

    Ok(Json(SubscriptionResponse::from_outcome(outcome)))
}

/// Unlinks an account from its subscription.
///
/// # Endpoint
///
/// `POST /api/subscriptions/unlink`
///
/// Same envelope contract as the update handler.
pub async fn unlink_account_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    Json(payload): Json<UnlinkAccountRequest>,
) -> Result<Json<SubscriptionResponse>, AppError> {
    payload.validate()?;

    let outcome = state
        .subscriptions
        .unlink_account(method.as_str(), uri.path(), &payload)
        .await;

    Ok(Json(SubscriptionResponse::from_outcome(outcome)))
}
