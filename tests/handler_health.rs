mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use subscription_service::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_degraded_without_database() {
    let state = common::create_test_state(common::unreachable_pool());
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
    assert!(json.get("version").is_some());
}
