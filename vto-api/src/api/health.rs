//! Health check and service banner

use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    pub timestamp: String,
}

/// GET /api/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        module: "vto-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: vto_common::time::now_rfc3339(),
    })
}

/// GET /
pub async fn banner() -> Json<Value> {
    Json(json!({ "message": "Virtual Tryon API" }))
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(banner))
        .route("/api/health", get(health_check))
}
