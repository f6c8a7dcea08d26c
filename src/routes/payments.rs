//! Mock payment provider webhooks.

use axum::body::Bytes;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use super::payload::{display_text, echo_field, parse_body};

/// Body of `POST /webhooks/stripe`.
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    event_type: Value,
    processed: bool,
    success: bool,
}

/// Acknowledge a Stripe webhook event.
pub async fn stripe_webhook(body: Bytes) -> Json<WebhookResponse> {
    let body = parse_body(&body);
    let event_type = echo_field(&body, "type", || Value::from("payment_intent.succeeded"));
    tracing::info!(event_type = %display_text(&event_type), "Mock Stripe webhook received");

    Json(WebhookResponse { event_type, processed: true, success: true })
}
