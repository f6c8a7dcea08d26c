//! Mock image processing.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use super::payload::{echo_field, parse_body, text_field};
use crate::ports::RandomSource;
use crate::state::AppState;

/// Body of `POST /images/process`.
#[derive(Debug, Serialize)]
pub struct ProcessImageResponse {
    operations_applied: Value,
    processed_url: String,
    processing_time: f64,
    success: bool,
}

/// Pretend to apply `operations` to `image_url`.
///
/// The reported processing time is drawn separately from the simulated
/// delay, so the two rarely agree.
pub async fn process_image(State(state): State<AppState>, body: Bytes) -> Json<ProcessImageResponse> {
    let body = parse_body(&body);
    let image_url = text_field(&body, "image_url", "");
    let operations = echo_field(&body, "operations", || Value::Array(Vec::new()));

    let mut random = state.random();
    let delay = random.uniform(0.2, 1.0);
    let processing_time = random.uniform(0.2, 1.0);
    state.latency().pause(delay).await;

    Json(ProcessImageResponse {
        operations_applied: operations,
        processed_url: format!("/api/processed-image?original={image_url}"),
        processing_time,
        success: true,
    })
}
