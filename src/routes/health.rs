//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

use super::payload::iso_timestamp;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    services: [&'static str; 3],
    status: &'static str,
    timestamp: String,
}

/// Report the server as healthy along with the services it mocks.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        services: ["ai_generation", "image_processing", "fulfillment"],
        status: "healthy",
        timestamp: iso_timestamp(),
    })
}
