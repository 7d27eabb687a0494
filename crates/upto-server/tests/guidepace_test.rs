//! GuidePace API integration tests against a running server.
//!
//! Run with: cargo test --test guidepace_test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

fn base_url() -> String {
    std::env::var("UPTO_TEST_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Estimate a scramble and check the segment breakdown.
#[tokio::test]
#[ignore]
async fn test_scrambling_estimate() {
    let client = Client::new();
    let base = base_url();

    let resp = client
        .post(format!("{}/api/guidepace/estimate", base))
        .json(&json!({
            "route": {
                "distance": 6.0,
                "elevationGain": 1600.0,
                "activityType": "hiking",
                "season": "summer"
            },
            "paceFactors": { "fitness": 1.1, "packWeight": 1.05 }
        }))
        .send()
        .await
        .expect("Failed to request estimate");

    assert!(resp.status().is_success(), "Estimate should succeed");
    let estimate: Value = resp.json().await.unwrap();
    assert_eq!(estimate["regime"], "scrambling");

    let segments = estimate["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[1]["calculationMethod"], "Chauvin System");
    assert!(estimate["totalHours"].as_f64().unwrap() > 0.0);
}

/// Validation errors come back as JSON with the offending field.
#[tokio::test]
#[ignore]
async fn test_invalid_estimate() {
    let client = Client::new();
    let base = base_url();

    let resp = client
        .post(format!("{}/api/guidepace/estimate", base))
        .json(&json!({
            "route": { "distance": 0.0, "elevationGain": 0.0, "activityType": "hiking" }
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["field"], "distance");
}

/// Health check echoes forwarded headers.
#[tokio::test]
#[ignore]
async fn test_health() {
    let client = Client::new();
    let base = base_url();

    let resp = client
        .get(format!("{}/api/health", base))
        .header("X-Forwarded-For", "198.51.100.4")
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success());
    assert!(resp.headers().contains_key("x-request-id"));
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["proxyHeaders"]["forwardedFor"], "198.51.100.4");
}
