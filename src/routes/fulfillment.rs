//! Mock print-on-demand fulfillment providers (Printful, Printify).

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use super::payload::{echo_field, iso_timestamp, parse_body, unix_seconds};
use crate::ports::RandomSource;
use crate::state::AppState;

const MIN_ORDER_ID: u32 = 1_000_000;
const MAX_ORDER_ID: u32 = 9_999_999;

/// A Printful draft order.
#[derive(Debug, Serialize)]
pub struct PrintfulOrder {
    created: String,
    external_id: Value,
    id: u32,
    items: Value,
    status: &'static str,
}

/// Printful's response envelope.
#[derive(Debug, Serialize)]
pub struct PrintfulResponse {
    code: u16,
    result: PrintfulOrder,
}

/// Create a draft Printful order.
pub async fn create_printful_order(
    State(state): State<AppState>,
    body: Bytes,
) -> Json<PrintfulResponse> {
    let body = parse_body(&body);
    let id = state.random().int_inclusive(MIN_ORDER_ID, MAX_ORDER_ID);

    Json(PrintfulResponse {
        code: 200,
        result: PrintfulOrder {
            created: iso_timestamp(),
            external_id: echo_field(&body, "external_id", || {
                Value::String(format!("tshop_{}", unix_seconds()))
            }),
            id,
            items: echo_field(&body, "items", || Value::Array(Vec::new())),
            status: "draft",
        },
    })
}

/// A Printify order; Printify returns it without an envelope.
#[derive(Debug, Serialize)]
pub struct PrintifyOrder {
    created_at: String,
    id: String,
    line_items: Value,
    status: &'static str,
}

/// Create a pending Printify order.
pub async fn create_printify_order(
    State(state): State<AppState>,
    body: Bytes,
) -> Json<PrintifyOrder> {
    let body = parse_body(&body);
    let id = state.random().int_inclusive(MIN_ORDER_ID, MAX_ORDER_ID);

    Json(PrintifyOrder {
        created_at: iso_timestamp(),
        id: format!("pf_{id}"),
        line_items: echo_field(&body, "line_items", || Value::Array(Vec::new())),
        status: "pending",
    })
}

/// One blank product in a provider catalog.
#[derive(Debug, Serialize)]
pub struct CatalogProduct {
    colors: &'static [&'static str],
    id: u32,
    name: &'static str,
}

/// Blank products grouped by product family.
#[derive(Debug, Serialize)]
pub struct ProductCatalog {
    caps: &'static [CatalogProduct],
    tote_bags: &'static [CatalogProduct],
    tshirts: &'static [CatalogProduct],
}

/// The same catalog is served for every provider.
static PRODUCTS: ProductCatalog = ProductCatalog {
    caps: &[
        CatalogProduct { colors: &["black", "navy", "white"], id: 10, name: "Classic Cap" },
        CatalogProduct { colors: &["black", "red", "blue"], id: 11, name: "Snapback" },
    ],
    tote_bags: &[
        CatalogProduct { colors: &["natural", "black"], id: 20, name: "Canvas Tote" },
        CatalogProduct { colors: &["white", "navy", "gray"], id: 21, name: "Premium Tote" },
    ],
    tshirts: &[
        CatalogProduct { colors: &["white", "black", "navy"], id: 1, name: "Unisex T-Shirt" },
        CatalogProduct { colors: &["white", "black", "gray"], id: 2, name: "Premium T-Shirt" },
    ],
};

/// Body of `GET /fulfillment/{provider}/products`.
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    products: &'static ProductCatalog,
    provider: String,
    success: bool,
}

/// List the blank products a provider offers.
pub async fn list_products(Path(provider): Path<String>) -> Json<ProductsResponse> {
    Json(ProductsResponse { products: &PRODUCTS, provider, success: true })
}
