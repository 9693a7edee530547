//! Recommendation client integration tests
//!
//! Each test stands up a local stub service on an ephemeral port and points
//! the client at it.

use advisor_core::RecommendationSource;
use advisor_recommend::RecommendationClient;
use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};

/// Spawn a stub recommendation service and return its base address
async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_fetch_returns_recommendations_in_order() {
    let router = Router::new().route(
        "/recommendations",
        post(|| async {
            Json(json!({
                "recommendations": [
                    {"name": "Accelerator A"},
                    {"name": "Grant B"},
                    "plain string entry"
                ]
            }))
        }),
    );
    let addr = spawn_stub(router).await;

    let client = RecommendationClient::new(format!("{addr}/recommendations"));
    let result = client.fetch(&json!({"stage": "seed"})).await.unwrap();

    assert_eq!(result.len(), 3);
    assert_eq!(result[0]["name"], "Accelerator A");
    assert_eq!(result[1]["name"], "Grant B");
    assert_eq!(result[2], "plain string entry");
}

#[tokio::test]
async fn test_fetch_forwards_payload_verbatim() {
    let router = Router::new().route(
        "/recommendations",
        post(|Json(payload): Json<Value>| async move {
            // Echo the payload back as the recommendation list
            Json(json!({ "recommendations": [payload] }))
        }),
    );
    let addr = spawn_stub(router).await;

    let client = RecommendationClient::new(format!("{addr}/recommendations"));
    let payload = json!({"industry": "fintech", "team_size": 4, "nested": {"a": [1, 2]}});
    let result = client.fetch(&payload).await.unwrap();

    assert_eq!(result, vec![payload]);
}

#[tokio::test]
async fn test_fetch_missing_key_yields_empty() {
    let router = Router::new().route(
        "/recommendations",
        post(|| async { Json(json!({"something_else": true})) }),
    );
    let addr = spawn_stub(router).await;

    let client = RecommendationClient::new(format!("{addr}/recommendations"));
    let result = client.fetch(&json!({})).await.unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_fetch_non_array_value_yields_empty() {
    let router = Router::new().route(
        "/recommendations",
        post(|| async { Json(json!({"recommendations": "not a list"})) }),
    );
    let addr = spawn_stub(router).await;

    let client = RecommendationClient::new(format!("{addr}/recommendations"));
    let result = client.fetch(&json!({})).await.unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_fetch_non_2xx_is_error() {
    let router = Router::new().route(
        "/recommendations",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down").into_response() }),
    );
    let addr = spawn_stub(router).await;

    let client = RecommendationClient::new(format!("{addr}/recommendations"));
    let err = client.fetch(&json!({})).await.unwrap_err();

    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_fetch_malformed_json_is_error() {
    let router = Router::new().route(
        "/recommendations",
        post(|| async { "this is not json" }),
    );
    let addr = spawn_stub(router).await;

    let client = RecommendationClient::new(format!("{addr}/recommendations"));
    let result = client.fetch(&json!({})).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_fetch_unreachable_service_is_error() {
    // Nothing is listening here
    let client = RecommendationClient::new("http://127.0.0.1:1/recommendations");
    let result = client.fetch(&json!({})).await;

    assert!(result.is_err());
}
