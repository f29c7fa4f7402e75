//! # Health and Root Handlers
//!
//! Liveness endpoint plus the service welcome message.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Basic health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
}

/// Welcome message response
#[derive(Serialize)]
pub struct WelcomeResponse {
    message: String,
}

/// Service root: GET /
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the AI-Powered Task Summarizer API".to_string(),
    })
}

/// Basic health check endpoint: GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
