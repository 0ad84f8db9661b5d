//! API route configuration.

use axum::{
    Router,
    routing::{post, put},
};

use crate::api::handlers::{
    provision_subscription_handler, unlink_account_handler, unsubscribe_handler,
    update_subscription_handler,
};
use crate::state::AppState;

/// The four subscription lifecycle endpoints.
///
/// # Endpoints
///
/// - `PUT  /subscriptions`             - carrier-reported update (renewal, cancellation, disconnection)
/// - `POST /subscriptions`             - provision a new (msisdn, shared id) pair
/// - `POST /subscriptions/unlink`      - user-initiated account unlink
/// - `POST /subscriptions/unsubscribe` - carrier-side unsubscription with audit trail
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/subscriptions",
            put(update_subscription_handler).post(provision_subscription_handler),
        )
        .route("/subscriptions/unlink", post(unlink_account_handler))
        .route("/subscriptions/unsubscribe", post(unsubscribe_handler))
}
