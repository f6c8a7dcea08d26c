//! HTTP route handlers for the mock services.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                            - Health check
//!
//! # AI design generation
//! POST /ai/generate-design                - Fake generation job, links to the image below
//! GET  /api/mock-design-image             - Rendered placeholder PNG
//!
//! # Image processing
//! POST /images/process                    - Fake image operations
//!
//! # Payments
//! POST /webhooks/stripe                   - Stripe webhook receiver
//!
//! # Fulfillment
//! POST /fulfillment/printful/orders       - Create Printful draft order
//! POST /fulfillment/printify/orders       - Create Printify order
//! GET  /fulfillment/{provider}/products   - Blank product catalog
//!
//! # Engagement
//! POST /social/share                      - Share a design
//! POST /analytics/track                   - Track an analytics event
//! ```

pub mod design;
pub mod engagement;
pub mod fulfillment;
pub mod health;
pub mod images;
pub mod payload;
pub mod payments;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Endpoint summary logged at startup.
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("AI Design Generation", "/ai/generate-design"),
    ("Image Processing", "/images/process"),
    ("Payment Webhooks", "/webhooks/stripe"),
    ("Printful API", "/fulfillment/printful/*"),
    ("Printify API", "/fulfillment/printify/*"),
    ("Health Check", "/health"),
];

/// Create the fulfillment routes router.
pub fn fulfillment_routes() -> Router<AppState> {
    Router::new()
        .route("/printful/orders", post(fulfillment::create_printful_order))
        .route("/printify/orders", post(fulfillment::create_printify_order))
        .route("/{provider}/products", get(fulfillment::list_products))
}

/// Create all mock service routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        // AI design generation
        .route("/ai/generate-design", post(design::generate_design))
        .route("/api/mock-design-image", get(design::mock_design_image))
        .route("/images/process", post(images::process_image))
        .route("/webhooks/stripe", post(payments::stripe_webhook))
        .nest("/fulfillment", fulfillment_routes())
        .route("/social/share", post(engagement::social_share))
        .route("/analytics/track", post(engagement::track_analytics))
}
