//! Typeface adapters and the loader that picks between them.

pub mod bitmap;
pub mod vector;

use std::path::Path;
use std::sync::Arc;

pub use bitmap::BitmapFont;
pub use vector::VectorFont;

use crate::ports::Typeface;

/// Load the configured font file, falling back to the built-in bitmap font.
///
/// Never fails: any problem with the external file is logged and the
/// built-in font is returned instead.
#[must_use]
pub fn load_typeface(path: Option<&Path>, size: f32) -> Arc<dyn Typeface> {
    if let Some(path) = path {
        match VectorFont::from_file(path, size) {
            Ok(font) => {
                tracing::debug!(font = font.name(), "Loaded vector font");
                return Arc::new(font);
            }
            Err(e) => tracing::debug!(error = %e, "Falling back to built-in font"),
        }
    }
    Arc::new(BitmapFont::for_pixel_size(size))
}
