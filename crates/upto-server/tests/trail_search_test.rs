//! Trail search integration tests. Needs a running server with Overpass access.
//!
//! Run with: cargo test --test trail_search_test -- --ignored

use reqwest::Client;
use serde_json::Value;

fn base_url() -> String {
    std::env::var("UPTO_TEST_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

#[tokio::test]
#[ignore]
async fn test_trail_search_ranks_results() {
    let client = Client::new();
    let base = base_url();

    let resp = client
        .get(format!("{}/api/trails/search", base))
        .query(&[("title", "Mailbox Peak"), ("type", "hiking"), ("location", "Washington")])
        .send()
        .await
        .expect("Failed to search trails");

    assert!(resp.status().is_success());
    let body: Value = resp.json().await.unwrap();
    let suggestions = body["suggestions"].as_array().unwrap();
    assert!(suggestions.len() <= 5);
    for pair in suggestions.windows(2) {
        let first = pair[0]["confidence"].as_f64().unwrap();
        let second = pair[1]["confidence"].as_f64().unwrap();
        assert!(first >= second, "Suggestions should be ordered by confidence");
    }
    for suggestion in suggestions {
        assert!(suggestion["confidence"].as_f64().unwrap() > 0.7);
        assert_eq!(suggestion["source"], "osm");
    }
}

#[tokio::test]
#[ignore]
async fn test_trail_search_without_title() {
    let client = Client::new();
    let resp = client
        .get(format!("{}/api/trails/search?type=hiking", base_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
}
