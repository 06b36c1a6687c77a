//! Integration tests for the HTTP API

use love_emergency::core::{create_router, NoopRecorder};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use std::sync::Arc;
use tower::ServiceExt;
use serde_json::Value;

fn create_test_router() -> axum::Router {
    create_router(Arc::new(NoopRecorder))
}

fn assess_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/assess")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

const REFERENCE_BODY: &str = r#"{
    "intimacy": [5, 5, 5],
    "passion": [3, 3, 3],
    "commitment": [1, 1, 1],
    "action_tendency": 1,
    "plan_stability": 1,
    "time_anchor_weeks": 4.0,
    "event_label": "Ordinary Friday",
    "target": "gentle-reserved"
}"#;

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_router();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["reports_generated"], 0);
}

#[tokio::test]
async fn test_assess_reference() {
    let app = create_test_router();

    let response = app.oneshot(assess_request(REFERENCE_BODY)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["report"]["love_type"], "liking");
    assert_eq!(json["report"]["trajectory"]["mode"], "converging");
    assert_eq!(json["report"]["stability"], "STABLE");
    assert_eq!(json["report"]["target"], "gentle-reserved");
    assert!(json["report"]["fingerprint"].as_str().unwrap().starts_with("rpt_"));
    assert_eq!(json["brave"], true);
    assert_eq!(json["chart"]["curve"].as_array().unwrap().len(), 200);
    assert_eq!(json["chart"]["radar"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_assess_counts_reports() {
    let app = create_test_router();

    let response = app.clone().oneshot(assess_request(REFERENCE_BODY)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["reports_generated"], 1);
}

#[tokio::test]
async fn test_assess_rejects_bad_anchor() {
    let app = create_test_router();
    let bad = REFERENCE_BODY.replace("\"time_anchor_weeks\": 4.0", "\"time_anchor_weeks\": 25.0");

    let response = app.oneshot(assess_request(&bad)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["code"], "R103_TIME_ANCHOR_OUT_OF_RANGE");
    assert!(json["message"].as_str().unwrap().contains("25"));
}

#[tokio::test]
async fn test_assess_rejects_bad_slider() {
    let app = create_test_router();
    let bad = REFERENCE_BODY.replace("\"passion\": [3, 3, 3]", "\"passion\": [3, 9, 3]");

    let response = app.oneshot(assess_request(&bad)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["code"], "R101_SLIDER_OUT_OF_RANGE");
}

async fn error_body(app: axum::Router, body: &str) -> (StatusCode, Value) {
    let response = app.oneshot(assess_request(body)).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_assess_rejects_bad_flag_with_code() {
    let bad = REFERENCE_BODY.replace("\"action_tendency\": 1", "\"action_tendency\": 3");

    let (status, json) = error_body(create_test_router(), &bad).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "R102_INVALID_FLAG");
    assert_eq!(json["message"], "behavior flag must be 1 or 2, got 3");
}

#[tokio::test]
async fn test_assess_rejects_unknown_target_with_code() {
    let bad = REFERENCE_BODY.replace("\"gentle-reserved\"", "\"grumpy\"");

    let (status, json) = error_body(create_test_router(), &bad).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "R105_UNKNOWN_PERSONALITY");
    assert!(json["message"].as_str().unwrap().contains("grumpy"));
}

#[tokio::test]
async fn test_assess_malformed_body_is_json_error() {
    let (status, json) = error_body(create_test_router(), "{\"intimacy\": [5, 5").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "R107_MALFORMED_BODY");
}

#[tokio::test]
async fn test_assess_missing_field_is_json_error() {
    let (status, json) = error_body(create_test_router(), r#"{"intimacy": [5, 5, 5]}"#).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "R107_MALFORMED_BODY");
}
