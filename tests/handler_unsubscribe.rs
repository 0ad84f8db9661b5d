mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use subscription_service::api::handlers::unsubscribe_handler;

fn test_server() -> TestServer {
    let state = common::create_test_state(common::unreachable_pool());
    let app = Router::new()
        .route("/api/subscriptions/unsubscribe", post(unsubscribe_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_unsubscribe_rejects_malformed_msisdn() {
    let server = test_server();

    let response = server
        .post("/api/subscriptions/unsubscribe")
        .json(&json!({
            "msisdn": "abc",
            "userId": "user-1"
        }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_unsubscribe_audit_write_failure_is_raised_as_500() {
    let server = test_server();

    // The pending audit row cannot be written, so the attempt is never made
    // and the error reaches the transport boundary.
    let response = server
        .post("/api/subscriptions/unsubscribe")
        .json(&json!({
            "msisdn": "+491700000001",
            "userId": "user-1",
            "requestTrxId": "trx-1"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "internal_error");
}
