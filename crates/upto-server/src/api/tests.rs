use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::{api, config::Config, state::AppState};

fn setup_app() -> axum::Router {
    let mut config = Config::from_env();
    config.server_name = "test-node".to_string();
    config.environment = "test".to_string();
    // Nothing listens on the discard port, so trail searches fail fast.
    config.overpass_url = "http://127.0.0.1:9/api/interpreter".to_string();
    let state = Arc::new(AppState::new(config));
    api::routes().with_state(state)
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_reports_proxy_headers() {
    let app = setup_app();
    let request = Request::builder()
        .uri("/api/health")
        .header("x-real-ip", "203.0.113.7")
        .header("x-forwarded-proto", "https")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let body = read_json(response).await;
    assert_eq!(body["status"], "Backend connected successfully!");
    assert_eq!(body["server"], "test-node");
    assert_eq!(body["environment"], "test");
    assert_eq!(body["proxyHeaders"]["realIP"], "203.0.113.7");
    assert_eq!(body["proxyHeaders"]["forwardedProto"], "https");
    assert!(body["proxyHeaders"]["forwardedFor"].is_null());
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn request_id_is_echoed() {
    let app = setup_app();
    let request = Request::builder()
        .uri("/api/guidepace/demo")
        .header("x-request-id", "trace-123")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "trace-123");
}

#[tokio::test]
async fn estimate_hiking_route() {
    let app = setup_app();
    let response = app
        .oneshot(post_json(
            "/api/guidepace/estimate",
            json!({
                "route": {
                    "distance": 10.0,
                    "elevationGain": 500.0,
                    "activityType": "hiking",
                    "season": "fall"
                }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["regime"], "hiking");
    assert_eq!(body["season"], "fall");
    assert_eq!(body["segments"].as_array().unwrap().len(), 2);
    assert!(body["totalHours"].as_f64().unwrap() > 0.0);
    assert_eq!(body["paceFactors"]["fitness"], 1.0);
}

#[tokio::test]
async fn estimate_rejects_negative_distance() {
    let app = setup_app();
    let response = app
        .oneshot(post_json(
            "/api/guidepace/estimate",
            json!({
                "route": { "distance": -1.0, "elevationGain": 0.0, "activityType": "hiking" }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["field"], "distance");
    assert!(body["error"].as_str().unwrap().contains("distance"));
}

#[tokio::test]
async fn estimate_rejects_zero_pace_factor() {
    let app = setup_app();
    let response = app
        .oneshot(post_json(
            "/api/guidepace/estimate",
            json!({
                "route": { "distance": 5.0, "elevationGain": 200.0, "activityType": "hiking" },
                "paceFactors": { "weather": 0.0 }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["field"], "weather");
}

#[tokio::test]
async fn malformed_body_is_a_json_error() {
    let app = setup_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/guidepace/estimate")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
    let body = read_json(response).await;
    assert!(body["error"].is_string());
    assert!(body["field"].is_null());
}

#[tokio::test]
async fn analyze_returns_segments() {
    let app = setup_app();
    let response = app
        .oneshot(post_json(
            "/api/guidepace/analyze",
            json!({
                "route": {
                    "distance": 8.0,
                    "elevationGain": 1000.0,
                    "activityType": "climbing",
                    "climbingGrade": "5.9",
                    "numberOfPitches": 4
                }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let segments = body.as_array().unwrap();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[1]["terrainType"], "technical");
    assert_eq!(segments[1]["difficulty"], "5.9");
    assert_eq!(segments[1]["calculationMethod"], "Technical System");
}

#[tokio::test]
async fn safety_for_long_winter_day() {
    let app = setup_app();
    let response = app
        .oneshot(get("/api/guidepace/safety?totalHours=10&season=winter"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["latestStartTime"], "-4:00");
    assert_eq!(body["warnings"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn safety_rejects_negative_hours() {
    let app = setup_app();
    let response = app
        .oneshot(get("/api/guidepace/safety?totalHours=-2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn safety_query_errors_are_json() {
    let app = setup_app();
    for uri in [
        "/api/guidepace/safety?season=winter",
        "/api/guidepace/safety?totalHours=soon",
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let body = read_json(response).await;
        assert!(body["error"].as_str().unwrap().starts_with("Invalid query string"));
        assert!(body["field"].is_null());
    }
}

#[tokio::test]
async fn demo_estimate_is_technical() {
    let app = setup_app();
    let response = app.oneshot(get("/api/guidepace/demo")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["regime"], "technical");
    assert_eq!(body["safetyLevel"], "ok");
}

#[tokio::test]
async fn trail_search_requires_title() {
    let app = setup_app();
    let response = app
        .oneshot(get("/api/trails/search?title=%20&type=hiking"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["field"], "title");
}

#[tokio::test]
async fn trail_search_degrades_when_overpass_is_down() {
    let app = setup_app();
    let request = Request::builder()
        .uri("/api/trails/search?title=Mount%20Si&location=Washington")
        .header("x-request-id", "trail-7")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert!(body["suggestions"].as_array().unwrap().is_empty());
    assert!(body["message"].as_str().unwrap().contains("request trail-7"));
}

#[tokio::test]
async fn adventure_stubs() {
    let app = setup_app();
    let response = app.clone().oneshot(get("/api/adventures/abc")).await.unwrap();
    let body = read_json(response).await;
    assert_eq!(body["message"], "Adventure abc endpoint ready");
    assert!(body["adventure"].is_null());

    let response = app
        .oneshot(post_json("/api/adventures", json!({ "title": "Mount Si" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Adventure creation endpoint ready");
    assert!(uuid::Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
}
