use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use count_numbers::server::create_router;
use serde_json::Value;
use tower::ServiceExt;

async fn get(path: &str) -> (StatusCode, Value) {
    let app = create_router();
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_count_numbers_success() {
    let (status, body) = get("/count-numbers?numbers=1,2,-3,0,5,-1,0").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["counts"]["positive"], 2);
    assert_eq!(body["counts"]["negative"], 2);
    assert_eq!(body["counts"]["zero"], 2);
    assert_eq!(body["counts"]["total"], 7);

    let echoed: Vec<f64> = serde_json::from_value(body["input_numbers"].clone()).unwrap();
    assert_eq!(echoed, vec![1.0, 2.0, -3.0, 0.0, 5.0, -1.0, 0.0]);
}

#[tokio::test]
async fn test_count_numbers_decimals() {
    let (status, body) = get("/count-numbers?numbers=3.14,-2.5,0,1.5,-0.5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["counts"]["positive"], 2);
    assert_eq!(body["counts"]["negative"], 2);
    assert_eq!(body["counts"]["zero"], 1);
    assert_eq!(body["counts"]["total"], 5);
}

#[tokio::test]
async fn test_negative_zero_counts_as_zero() {
    let (status, body) = get("/count-numbers?numbers=-0.0").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["counts"]["zero"], 1);
    assert_eq!(body["counts"]["positive"], 0);
    assert_eq!(body["counts"]["negative"], 0);
}

#[tokio::test]
async fn test_missing_numbers_parameter() {
    let (status, body) = get("/count-numbers").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing numbers parameter");
    assert!(body["message"].as_str().unwrap().contains("comma-separated"));
}

#[tokio::test]
async fn test_empty_numbers_parameter() {
    let (status, body) = get("/count-numbers?numbers=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing numbers parameter");
}

#[tokio::test]
async fn test_invalid_number_format() {
    let (status, body) = get("/count-numbers?numbers=1,2,x").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid number format");
    // All-or-nothing parse: no partial result alongside the error.
    assert!(body.get("counts").is_none());
}

#[tokio::test]
async fn test_echo_round_trip() {
    let (_, first) = get("/count-numbers?numbers=1.5,-2,0,3").await;

    let echoed: Vec<f64> = serde_json::from_value(first["input_numbers"].clone()).unwrap();
    let rejoined = echoed
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(",");

    let (status, second) = get(&format!("/count-numbers?numbers={}", rejoined)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["counts"], first["counts"]);
    assert_eq!(second["input_numbers"], first["input_numbers"]);
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_home_lists_endpoints() {
    let (status, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Number Counting API");
    assert!(body["endpoints"].get("count-numbers").is_some());
    assert!(body["endpoints"].get("health").is_some());
}
