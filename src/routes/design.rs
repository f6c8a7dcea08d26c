//! Mock AI design generation and the image endpoint it links to.

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, HeaderValue};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use super::payload::{display_text, echo_field, parse_body, unix_seconds};
use crate::design::template::CATALOG;
use crate::design::{fallback, DesignRequest, RenderedImage};
use crate::params::DEFAULT_DIMENSION;
use crate::ports::{choose, RandomSource};
use crate::state::AppState;

/// Body of `POST /ai/generate-design`.
#[derive(Debug, Serialize)]
pub struct GenerateDesignResponse {
    design_id: String,
    design_url: String,
    processing_time: f64,
    product_type: Value,
    prompt_used: Value,
    recommendations: [String; 3],
    style_notes: String,
    success: bool,
}

/// Pretend to run an AI model, then link to a rendered placeholder.
pub async fn generate_design(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let body = parse_body(&body);
    let prompt = echo_field(&body, "prompt", || Value::from("Default design"));
    let product_type = echo_field(&body, "product_type", || Value::from("tshirt"));
    let (prompt_text, product_text) = (display_text(&prompt), display_text(&product_type));

    let mut random = state.random();
    let processing_time = random.uniform(0.5, 2.0);
    let style = choose(random.as_mut(), CATALOG).map_or("bold", |t| t.style);
    state.latency().pause(processing_time).await;

    let design_id = format!("mock_design_{}", unix_seconds());
    tracing::debug!(
        %design_id,
        product_type = %product_text,
        processing_time,
        "Generated mock design"
    );

    Json(GenerateDesignResponse {
        design_url: format!(
            "/api/mock-design-image?prompt={prompt_text}&product_type={product_text}&id={design_id}"
        ),
        design_id,
        processing_time,
        recommendations: [
            format!("Works well on {product_text}"),
            "Consider trying different colors".to_string(),
            "Great for casual wear".to_string(),
        ],
        style_notes: format!("Generated {style} style design"),
        product_type,
        prompt_used: prompt,
        success: true,
    })
}

/// Render a placeholder design as PNG.
///
/// The query is read as raw pairs; a repeated key keeps its first value.
pub async fn mock_design_image(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> impl IntoResponse {
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let prompt = first_value(&pairs, "prompt").unwrap_or("Mock Design");
    let product_type = first_value(&pairs, "product_type").unwrap_or("tshirt");
    let id = first_value(&pairs, "id").unwrap_or("default");
    let disposition = inline_disposition(&format!("design_{id}.png"));

    let request = DesignRequest::new(prompt, product_type);
    let rendering = tokio::task::spawn_blocking(move || {
        let mut random = state.random();
        state.synthesizer().synthesize(&request, random.as_mut())
    });
    let image = rendering.await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Design render task failed, serving fallback image");
        fallback(DEFAULT_DIMENSION, DEFAULT_DIMENSION)
    });

    (
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(RenderedImage::MIME_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        image.png,
    )
}

fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

/// `inline; filename="..."`, with characters a header cannot carry replaced.
fn inline_disposition(filename: &str) -> HeaderValue {
    let safe: String = filename
        .chars()
        .map(|c| if (c.is_ascii_graphic() || c == ' ') && c != '"' && c != '\\' { c } else { '_' })
        .collect();
    HeaderValue::from_str(&format!("inline; filename=\"{safe}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("inline"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use image::GenericImageView;
    use serde_json::Value;

    use crate::adapters::scripted::ScriptedRandom;
    use crate::routes::testing::{get, post_json, scripted_app, test_app};

    #[tokio::test]
    async fn generate_design_echoes_inputs() {
        let app = scripted_app(ScriptedRandom::new().uniform_value(1.25).pick(2));
        let (status, _, body) = post_json(
            app,
            "/ai/generate-design",
            r#"{"prompt": "Retro cat", "product_type": "cap"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_slice(&body).unwrap();
        let design_id = json["design_id"].as_str().unwrap();
        assert!(design_id.starts_with("mock_design_"));
        assert_eq!(
            json["design_url"],
            format!("/api/mock-design-image?prompt=Retro cat&product_type=cap&id={design_id}")
        );
        assert_eq!(json["prompt_used"], "Retro cat");
        assert_eq!(json["product_type"], "cap");
        assert_eq!(json["processing_time"], 1.25);
        assert_eq!(json["style_notes"], "Generated modern style design");
        assert_eq!(
            json["recommendations"],
            serde_json::json!([
                "Works well on cap",
                "Consider trying different colors",
                "Great for casual wear"
            ])
        );
        assert_eq!(json["success"], true);
    }

    #[tokio::test]
    async fn generate_design_keys_are_sorted() {
        let app = scripted_app(ScriptedRandom::new().uniform_value(0.5).pick(0));
        let (_, _, body) = post_json(app, "/ai/generate-design", "{}").await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.starts_with(r#"{"design_id":"#), "{text}");
        assert!(text.ends_with(r#""success":true}"#), "{text}");
    }

    #[tokio::test]
    async fn generate_design_defaults_on_bad_body() {
        for body in ["", "{not json", "[]", r#"{"prompt": null}"#] {
            let app = scripted_app(ScriptedRandom::new().uniform_value(0.9).pick(0));
            let (status, _, bytes) = post_json(app, "/ai/generate-design", body).await;
            assert_eq!(status, StatusCode::OK, "{body}");

            let json: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(json["prompt_used"], "Default design");
            assert_eq!(json["product_type"], "tshirt");
            assert_eq!(json["style_notes"], "Generated bold style design");
        }
    }

    #[tokio::test]
    async fn image_defaults_without_query() {
        let (status, headers, body) = get(test_app(), "/api/mock-design-image").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "image/png");
        assert_eq!(headers[header::CONTENT_DISPOSITION], "inline; filename=\"design_default.png\"");

        let decoded = image::load_from_memory(&body).unwrap();
        assert_eq!(decoded.dimensions(), (400, 400));
    }

    #[tokio::test]
    async fn image_uses_query_parameters() {
        let uri = "/api/mock-design-image?prompt=Hello%20World&product_type=tote_bag&id=mock_design_42";
        let (status, headers, body) = get(test_app(), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "inline; filename=\"design_mock_design_42.png\""
        );

        let canvas = image::load_from_memory(&body).unwrap().to_rgb8();
        // Tote bags fill a large square; the scripted template is #0066CC.
        assert_eq!(canvas.get_pixel(60, 60).0, [0x00, 0x66, 0xCC]);
    }

    #[tokio::test]
    async fn image_never_rejects_odd_ids() {
        let uri = "/api/mock-design-image?id=%22%0A%E2%9C%93";
        let (status, headers, _) = get(test_app(), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_DISPOSITION], "inline; filename=\"design____.png\"");
    }

    #[tokio::test]
    async fn repeated_query_key_keeps_first_value_and_the_rest() {
        let uri = "/api/mock-design-image?prompt=a&prompt=b&product_type=tote_bag&id=7";
        let (status, headers, body) = get(test_app(), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_DISPOSITION], "inline; filename=\"design_7.png\"");

        let canvas = image::load_from_memory(&body).unwrap().to_rgb8();
        assert_eq!(canvas.get_pixel(60, 60).0, [0x00, 0x66, 0xCC]);
    }

    #[tokio::test]
    async fn generate_design_echoes_non_string_fields_verbatim() {
        let app = scripted_app(ScriptedRandom::new().uniform_value(1.0).pick(0));
        let (_, _, body) =
            post_json(app, "/ai/generate-design", r#"{"prompt": 12, "product_type": true}"#).await;

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["prompt_used"], serde_json::json!(12));
        assert_eq!(json["product_type"], serde_json::json!(true));
        let design_url = json["design_url"].as_str().unwrap();
        assert!(design_url.starts_with("/api/mock-design-image?prompt=12&product_type=true&id="));
        assert_eq!(json["recommendations"][0], "Works well on true");
    }

    #[test]
    fn first_value_wins() {
        let pairs = vec![
            ("id".to_string(), "1".to_string()),
            ("id".to_string(), "2".to_string()),
        ];
        assert_eq!(first_value(&pairs, "id"), Some("1"));
        assert_eq!(first_value(&pairs, "prompt"), None);
    }

    #[test]
    fn disposition_keeps_printable_ascii() {
        assert_eq!(inline_disposition("design_a b.png"), "inline; filename=\"design_a b.png\"");
    }
}
