//! File naming and saving for rendered designs.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::MockError;

/// Generate an output filename from a prompt and product type.
///
/// Sanitizes the first 50 characters of the prompt to kebab-case and
/// appends the product type and a unix timestamp.
#[must_use]
pub fn auto_filename(prompt: &str, product_type: &str) -> String {
    let prompt = kebab_slug(prompt, 50);
    let product = kebab_slug(product_type, 20);
    let timestamp = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
    format!("{prompt}-{product}-{timestamp}.png")
}

/// Lowercase kebab-case slug of the ASCII alphanumeric runs in `input`,
/// cut to `max_len` bytes. Falls back to `"design"` when nothing is left.
#[must_use]
pub fn kebab_slug(input: &str, max_len: usize) -> String {
    let slug = input
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|run| !run.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    // Only ASCII survives the split, so any byte index is a char boundary.
    let slug = slug[..slug.len().min(max_len)].trim_end_matches('-');
    if slug.is_empty() {
        "design".to_string()
    } else {
        slug.to_string()
    }
}

/// Resolve the output path: use explicit path or auto-generate.
#[must_use]
pub fn resolve_output_path(explicit: Option<&str>, prompt: &str, product_type: &str) -> PathBuf {
    match explicit {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(auto_filename(prompt, product_type)),
    }
}

/// Write encoded PNG bytes to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_png(png: &[u8], path: &Path) -> Result<(), MockError> {
    std::fs::write(path, png)?;
    Ok(())
}
