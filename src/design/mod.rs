//! Mock design synthesis: turns a prompt and product type into a PNG.
//!
//! Rendering never fails outward. If anything goes wrong while drawing or
//! encoding, a flat gray placeholder of the same size is returned instead.

pub mod layout;
pub mod template;

use std::io::Cursor;
use std::sync::Arc;

use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_ellipse_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;

use crate::adapters::font::BitmapFont;
use crate::error::MockError;
use crate::model::ProductType;
use crate::params::{caption_for, clamp_dimension, truncate_prompt, DEFAULT_DIMENSION};
use crate::ports::{choose, RandomSource, Typeface};

use layout::{centered_x, Layout, Shape, CAPTION_ORIGIN};
use template::{foreground_for, parse_hex_color, StyleTemplate, CATALOG, BLACK, WHITE};

/// Caption color in the corner of every design.
const CAPTION_COLOR: Rgb<u8> = Rgb([0x66, 0x66, 0x66]);

/// Background of the fallback placeholder.
const FALLBACK_BACKGROUND: Rgb<u8> = Rgb([0xCC, 0xCC, 0xCC]);

/// Text drawn on the fallback placeholder.
const FALLBACK_TEXT: &str = "Mock Design";

/// Inputs for one mock design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignRequest {
    /// Free-form prompt; only the first characters are drawn.
    pub prompt: String,
    /// Product type as supplied by the caller, used verbatim in the caption.
    pub product_type: String,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl DesignRequest {
    /// A request at the default 400x400 size.
    pub fn new(prompt: impl Into<String>, product_type: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            product_type: product_type.into(),
            width: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
        }
    }

    /// Set the canvas size, clamped to `1..=4096` on each edge.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = clamp_dimension(width);
        self.height = clamp_dimension(height);
        self
    }

    /// Layout family for this request's product type.
    #[must_use]
    pub fn product(&self) -> ProductType {
        ProductType::from_name(&self.product_type)
    }
}

/// A rendered PNG and its dimensions.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    /// Encoded PNG bytes.
    pub png: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl RenderedImage {
    /// MIME type of [`RenderedImage::png`].
    pub const MIME_TYPE: &'static str = "image/png";
}

/// Draws placeholder product designs.
pub struct Synthesizer {
    typeface: Arc<dyn Typeface>,
    catalog: &'static [StyleTemplate],
}

impl Synthesizer {
    /// Create a synthesizer that draws text with `typeface`.
    #[must_use]
    pub fn new(typeface: Arc<dyn Typeface>) -> Self {
        Self { typeface, catalog: CATALOG }
    }

    #[cfg(test)]
    fn with_catalog(mut self, catalog: &'static [StyleTemplate]) -> Self {
        self.catalog = catalog;
        self
    }

    /// Render a design, substituting the fallback placeholder on any error.
    pub fn synthesize(
        &self,
        request: &DesignRequest,
        random: &mut dyn RandomSource,
    ) -> RenderedImage {
        let (width, height) = (clamp_dimension(request.width), clamp_dimension(request.height));
        match self.render(request, width, height, random) {
            Ok(png) => RenderedImage { png, width, height },
            Err(e) => {
                tracing::warn!(error = %e, "Design render failed, serving fallback image");
                fallback(width, height)
            }
        }
    }

    fn render(
        &self,
        request: &DesignRequest,
        width: u32,
        height: u32,
        random: &mut dyn RandomSource,
    ) -> Result<Vec<u8>, MockError> {
        let mut canvas = RgbImage::from_pixel(width, height, WHITE);

        let template = choose(random, self.catalog).ok_or(MockError::EmptyCatalog)?;
        let hex = choose(random, template.colors).ok_or(MockError::EmptyCatalog)?;
        let background = parse_hex_color(hex)?;
        let foreground = foreground_for(background);
        tracing::debug!(
            category = ?template.category,
            style = template.style,
            color = *hex,
            product = %request.product(),
            "Rendering mock design"
        );

        let layout = Layout::for_product(request.product(), width, height);
        draw_shape(&mut canvas, layout.shape, background);

        let text = truncate_prompt(&request.prompt);
        let text_x = centered_x(width, self.typeface.text_width(&text));
        self.typeface.draw_text(&mut canvas, text_x, layout.text_y, foreground, &text);

        let (caption_x, caption_y) = CAPTION_ORIGIN;
        let caption = caption_for(&request.product_type);
        self.typeface.draw_text(&mut canvas, caption_x, caption_y, CAPTION_COLOR, &caption);

        encode_png(&canvas)
    }
}

fn draw_shape(canvas: &mut RgbImage, shape: Shape, color: Rgb<u8>) {
    match shape {
        Shape::Ellipse { left, top, right, bottom } => {
            let center = (left + (right - left) / 2, top + (bottom - top) / 2);
            draw_filled_ellipse_mut(canvas, center, (right - left) / 2, (bottom - top) / 2, color);
        }
        Shape::Rect { left, top, right, bottom } => {
            let (w, h) = (right.abs_diff(left) + 1, bottom.abs_diff(top) + 1);
            draw_filled_rect_mut(canvas, Rect::at(left, top).of_size(w, h), color);
        }
    }
}

/// Flat gray placeholder with a fixed label, drawn with the built-in font.
pub fn fallback(width: u32, height: u32) -> RenderedImage {
    let mut canvas = RgbImage::from_pixel(width, height, FALLBACK_BACKGROUND);
    let y = i32::try_from(height / 2).unwrap_or(i32::MAX);
    BitmapFont::default().draw_text(&mut canvas, 50, y, BLACK, FALLBACK_TEXT);

    let png = encode_png(&canvas).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Fallback image encoding failed");
        Vec::new()
    });
    RenderedImage { png, width, height }
}

fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>, MockError> {
    let mut buf = Cursor::new(Vec::new());
    canvas.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}
