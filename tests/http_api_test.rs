#![cfg(feature = "http-server")]

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chiron_oracle::http::{create_router, AppState};
use common::{engine_with, StubOracle};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

fn app(oracle: StubOracle) -> Router {
    create_router(AppState::new(engine_with(Arc::new(oracle))))
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_chiron(payload: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/chiron")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

fn kolkata_payload() -> serde_json::Value {
    serde_json::json!({
        "year": 1990,
        "month": 5,
        "day": 12,
        "hour": 14.0,
        "lat": 9.93,
        "lon": 76.26,
        "timezone": "Asia/Kolkata"
    })
}

#[tokio::test]
async fn test_health_check() {
    let response = app(StubOracle::at(0.0))
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "chiron-oracle");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["time"].as_i64().unwrap() > 1_600_000_000);
}

#[tokio::test]
async fn test_index_serves_form() {
    let response = app(StubOracle::at(0.0))
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("/api/chiron"));
}

#[tokio::test]
async fn test_chiron_reading() {
    let response = app(StubOracle::at(227.5))
        .oneshot(post_chiron(kolkata_payload()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["sign"], "Scorpio");
    assert_eq!(body["degree"], 17.5);
    assert_eq!(body["house"], 1);
    assert_eq!(body["timestamp"], 642_501_000);
    assert!(body["traditional_wound"].is_string());
    assert!(body["lhp_strength"].is_string());
}

#[tokio::test]
async fn test_invalid_timezone_is_bad_request() {
    let mut payload = kolkata_payload();
    payload["timezone"] = serde_json::json!("Atlantis/Capital");

    let response = app(StubOracle::at(227.5)).oneshot(post_chiron(payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["code"], "INVALID_TIMEZONE");
    assert!(body["message"].as_str().unwrap().contains("Atlantis/Capital"));
}

#[tokio::test]
async fn test_invalid_date_is_bad_request() {
    let mut payload = kolkata_payload();
    payload["month"] = serde_json::json!(13);

    let response = app(StubOracle::at(227.5)).oneshot(post_chiron(payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], "INVALID_TIME");
}

#[tokio::test]
async fn test_oracle_failure_is_bad_gateway() {
    let response = app(StubOracle::failing("ephemeris file missing"))
        .oneshot(post_chiron(kolkata_payload()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = json_body(response).await;
    assert_eq!(body["code"], "EPHEMERIS_FAILURE");
    assert!(body["message"].as_str().unwrap().contains("ephemeris file missing"));
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let response = app(StubOracle::at(227.5))
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/chiron")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"year\": 1990"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_get_on_chiron_is_not_allowed() {
    let response = app(StubOracle::at(227.5))
        .oneshot(Request::builder().uri("/api/chiron").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cors_preflight() {
    let response = app(StubOracle::at(0.0))
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/chiron")
                .header(header::ORIGIN, "https://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    assert!(methods.contains("POST"));
    assert!(methods.contains("OPTIONS"));
}
