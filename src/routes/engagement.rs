//! Mock social sharing and analytics tracking.

use axum::body::Bytes;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use super::payload::{display_text, echo_field, parse_body, text_field};

/// Body of `POST /social/share`.
#[derive(Debug, Serialize)]
pub struct ShareResponse {
    message: &'static str,
    platform: Value,
    share_url: String,
    success: bool,
}

/// Pretend to share a design on a social platform.
pub async fn social_share(body: Bytes) -> Json<ShareResponse> {
    let body = parse_body(&body);
    let platform = echo_field(&body, "platform", || Value::from("instagram"));
    let design_id = text_field(&body, "design_id", "");

    Json(ShareResponse {
        message: "Design shared successfully!",
        platform,
        share_url: format!("https://tshop.local/designs/{design_id}"),
        success: true,
    })
}

/// Body of `POST /analytics/track`.
#[derive(Debug, Serialize)]
pub struct TrackResponse {
    event: Value,
    success: bool,
    tracked: bool,
}

/// Log an analytics event.
pub async fn track_analytics(body: Bytes) -> Json<TrackResponse> {
    let body = parse_body(&body);
    let event = echo_field(&body, "event", || Value::from("page_view"));
    tracing::info!(event = %display_text(&event), payload = %body, "Analytics event");

    Json(TrackResponse { event, success: true, tracked: true })
}
