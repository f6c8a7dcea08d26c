//! Shape placement per product type.
//!
//! Coordinates are authored on a 400x400 grid and scaled to the canvas, so
//! a 400x400 render uses them verbatim.

use crate::model::ProductType;

/// Edge length of the authoring grid.
const GRID: i64 = 400;

/// Baseline row of the prompt text on the grid.
const TEXT_ROW: i64 = 180;

/// Top-left corner of the caption, in canvas pixels.
pub const CAPTION_ORIGIN: (i32, i32) = (10, 10);

/// A filled shape in canvas pixels. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Ellipse inscribed in the box `(left, top)`–`(right, bottom)`.
    Ellipse {
        /// Left edge.
        left: i32,
        /// Top edge.
        top: i32,
        /// Right edge.
        right: i32,
        /// Bottom edge.
        bottom: i32,
    },
    /// Axis-aligned rectangle `(left, top)`–`(right, bottom)`.
    Rect {
        /// Left edge.
        left: i32,
        /// Top edge.
        top: i32,
        /// Right edge.
        right: i32,
        /// Bottom edge.
        bottom: i32,
    },
}

/// Where the design shape and the prompt text go on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// The background shape.
    pub shape: Shape,
    /// Top row of the prompt text.
    pub text_y: i32,
}

impl Layout {
    /// Lay out a design for `product` on a `width` x `height` canvas.
    #[must_use]
    pub fn for_product(product: ProductType, width: u32, height: u32) -> Self {
        let x = |v: i64| scale(v, width);
        let y = |v: i64| scale(v, height);

        let shape = match product {
            ProductType::Cap => {
                Shape::Ellipse { left: x(50), top: y(100), right: x(350), bottom: y(300) }
            }
            ProductType::ToteBag => {
                Shape::Rect { left: x(50), top: y(50), right: x(350), bottom: y(350) }
            }
            ProductType::Tshirt => {
                Shape::Ellipse { left: x(100), top: y(100), right: x(300), bottom: y(300) }
            }
        };

        Self { shape, text_y: y(TEXT_ROW) }
    }
}

/// Map a grid coordinate onto a canvas edge of `extent` pixels.
fn scale(value: i64, extent: u32) -> i32 {
    let scaled = value * i64::from(extent) / GRID;
    i32::try_from(scaled).unwrap_or(i32::MAX)
}

/// Left edge that centers text of `text_width` on a canvas of `width`,
/// rounding toward negative infinity when the text is wider than the canvas.
#[must_use]
pub fn centered_x(width: u32, text_width: u32) -> i32 {
    let offset = (i64::from(width) - i64::from(text_width)).div_euclid(2);
    i32::try_from(offset).unwrap_or(i32::MIN)
}
