//! The fixed catalog of style templates and color rules.

use image::Rgb;
use crate::error::MockError;

/// Kind of design a template imitates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Typographic designs.
    Text,
    /// Illustrations and shapes.
    Graphic,
    /// Brand marks.
    Logo,
    /// Repeating patterns.
    Pattern,
}

/// A style template: a style label plus the background colors it may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTemplate {
    /// Design category.
    pub category: Category,
    /// Style label shown in generation notes.
    pub style: &'static str,
    /// Candidate background colors as `#RRGGBB`.
    pub colors: &'static [&'static str],
}

/// Every template the mock generator draws from.
pub const CATALOG: &[StyleTemplate] = &[
    StyleTemplate {
        category: Category::Text,
        style: "bold",
        colors: &["#000000", "#FFFFFF", "#FF0000"],
    },
    StyleTemplate {
        category: Category::Graphic,
        style: "geometric",
        colors: &["#0066CC", "#00CC66", "#CC6600"],
    },
    StyleTemplate {
        category: Category::Logo,
        style: "modern",
        colors: &["#333333", "#666666", "#999999"],
    },
    StyleTemplate {
        category: Category::Pattern,
        style: "abstract",
        colors: &["#FF6B6B", "#4ECDC4", "#45B7D1"],
    },
];

/// Pure black.
pub const BLACK: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);
/// Pure white.
pub const WHITE: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);

/// Parse a `#RRGGBB` color.
///
/// # Errors
///
/// Returns an error unless the input is `#` followed by six hex digits.
pub fn parse_hex_color(hex: &str) -> Result<Rgb<u8>, MockError> {
    let digits = hex
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| MockError::Color(hex.to_string()))?;
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| MockError::Color(hex.to_string()))
    };
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

/// Text color for a background: white on pure black, black on anything else.
#[must_use]
pub fn foreground_for(background: Rgb<u8>) -> Rgb<u8> {
    if background == BLACK {
        WHITE
    } else {
        BLACK
    }
}
