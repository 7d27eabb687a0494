//! REST API routes.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    middleware,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::api::{estimate, request_id, trails};
use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/trails/search", get(trails::search_trails))
        .route("/api/adventures", post(create_adventure))
        .route("/api/adventures/:id", get(get_adventure))
        .route("/api/guidepace/estimate", post(estimate::estimate))
        .route("/api/guidepace/analyze", post(estimate::analyze))
        .route("/api/guidepace/safety", get(estimate::safety))
        .route("/api/guidepace/demo", get(estimate::demo))
        .layer(middleware::from_fn(request_id::ensure_request_id))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProxyHeaders {
    #[serde(rename = "realIP")]
    real_ip: Option<String>,
    forwarded_for: Option<String>,
    forwarded_proto: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    server: String,
    port: u16,
    proxy_headers: ProxyHeaders,
    timestamp: String,
    environment: String,
}

/// Liveness check that also reports what the reverse proxy forwarded.
async fn health(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Json<HealthResponse> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    let config = state.config();

    Json(HealthResponse {
        status: "Backend connected successfully!",
        server: config.server_name.clone(),
        port: config.server_port,
        proxy_headers: ProxyHeaders {
            real_ip: header("x-real-ip"),
            forwarded_for: header("x-forwarded-for"),
            forwarded_proto: header("x-forwarded-proto"),
        },
        timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        environment: config.environment.clone(),
    })
}

async fn get_adventure(Path(id): Path<String>) -> Json<Value> {
    Json(json!({
        "message": format!("Adventure {} endpoint ready", id),
        "adventure": null,
    }))
}

async fn create_adventure() -> Json<Value> {
    let id = uuid::Uuid::new_v4().to_string();
    tracing::debug!("Issued adventure id {}", id);
    Json(json!({
        "message": "Adventure creation endpoint ready",
        "id": id,
    }))
}
