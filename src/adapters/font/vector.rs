//! TrueType/OpenType font adapter backed by `ab_glyph` and `imageproc`.

use std::path::Path;

use ab_glyph::{FontArc, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::error::MockError;
use crate::ports::Typeface;

/// A scalable font loaded from disk.
pub struct VectorFont {
    font: FontArc,
    scale: PxScale,
    name: String,
}

impl VectorFont {
    /// Load a font file and render it at `size` pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a usable font.
    pub fn from_file(path: &Path, size: f32) -> Result<Self, MockError> {
        let bytes = std::fs::read(path)
            .map_err(|e| MockError::Font(format!("Failed to read {}: {e}", path.display())))?;
        let font = FontArc::try_from_vec(bytes)
            .map_err(|e| MockError::Font(format!("Failed to parse {}: {e}", path.display())))?;
        if !(size.is_finite() && size > 0.0) {
            return Err(MockError::Font(format!("Invalid font size {size}")));
        }
        let name = path
            .file_stem()
            .map_or_else(|| "vector".to_string(), |s| s.to_string_lossy().into_owned());
        Ok(Self { font, scale: PxScale::from(size), name })
    }
}

impl Typeface for VectorFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn text_width(&self, text: &str) -> u32 {
        text_size(self.scale, &self.font, text).0
    }

    fn draw_text(&self, canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, text: &str) {
        draw_text_mut(canvas, color, x, y, self.scale, &self.font, text);
    }
}
