//! Product types and the layout family each one selects.

use std::fmt;

/// Merchandise categories with a distinct design layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductType {
    /// T-shirt: centered circle. Also the layout for unknown products.
    #[default]
    Tshirt,
    /// Cap: wide ellipse across the middle of the canvas.
    Cap,
    /// Tote bag: large centered square.
    ToteBag,
}

/// Wire names for each product type.
const NAMES: &[(&str, ProductType)] =
    &[("tshirt", ProductType::Tshirt), ("cap", ProductType::Cap), ("tote_bag", ProductType::ToteBag)];

impl ProductType {
    /// Resolve a wire name to a product type.
    ///
    /// Matching is exact; anything unrecognized uses the t-shirt layout.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        NAMES.iter().find(|&&(n, _)| n == name).map_or(Self::Tshirt, |&(_, product)| product)
    }

    /// The canonical wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tshirt => "tshirt",
            Self::Cap => "cap",
            Self::ToteBag => "tote_bag",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
