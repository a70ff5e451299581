//! Health check endpoint

use axum::{Json, Router, routing::get};
use serde::Serialize;

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "AI Voice Assistant";

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Liveness probe; does not touch the generative-text API
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

/// Build health router (no state needed)
pub fn router() -> Router {
    Router::new().route("/health", get(health))
}
