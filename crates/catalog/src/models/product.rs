//! Product domain types.

use core::fmt;

use serde::{Deserialize, Serialize};

use mainmarket_core::{Price, ProductId};

/// Category tags partitioning the catalog for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fashion,
    Art,
    Electronics,
    Food,
    Home,
}

impl Category {
    /// The tag string used in navigation links and product data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fashion => "fashion",
            Self::Art => "art",
            Self::Electronics => "electronics",
            Self::Food => "food",
            Self::Home => "home",
        }
    }

    /// Parse a category tag.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fashion" => Some(Self::Fashion),
            "art" => Some(Self::Art),
            "electronics" => Some(Self::Electronics),
            "food" => Some(Self::Food),
            "home" => Some(Self::Home),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog product.
///
/// Immutable once loaded - the demo set is fixed, and a real deployment
/// would source these from an external catalog service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Price in the currency's smallest display unit.
    pub price: Price,
    /// Category tag for filtering.
    pub category: Category,
    /// Seller display name.
    pub seller: String,
    /// Product image URL.
    pub image: String,
    /// Short description shown on the card.
    pub description: String,
    /// Average rating, 0.0 to 5.0.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Whether the product can currently be added to the cart.
    pub in_stock: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tag_roundtrip() {
        for category in [
            Category::Fashion,
            Category::Art,
            Category::Electronics,
            Category::Food,
            Category::Home,
        ] {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse("toys"), None);
        assert_eq!(Category::parse("Fashion"), None);
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&Category::Electronics).expect("serialize");
        assert_eq!(json, "\"electronics\"");
    }
}
