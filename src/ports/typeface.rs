//! Typeface port for measuring and drawing text onto a canvas.

use image::{Rgb, RgbImage};

/// Measures and draws single-line text.
pub trait Typeface: Send + Sync {
    /// Short human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Rendered width of `text` in pixels.
    fn text_width(&self, text: &str) -> u32;

    /// Draw `text` with its top-left corner at `(x, y)`. Pixels that fall
    /// outside the canvas are clipped.
    fn draw_text(&self, canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, text: &str);
}
