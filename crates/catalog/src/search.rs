//! Category filtering and text search.
//!
//! Both are linear passes over the full product list. They are independent
//! views - applying one does not compose with the other, matching the page
//! (a search ignores the active category and vice versa).

use core::fmt;

use crate::models::{Category, Product};

/// The active category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Pass the full list through unfiltered.
    #[default]
    All,
    /// Keep only products whose category matches exactly.
    Only(Category),
}

impl CategoryFilter {
    /// Parse a navigation tag (`all` or a category tag).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s == "all" {
            Some(Self::All)
        } else {
            Category::parse(s).map(Self::Only)
        }
    }

    /// The tag string carried by the matching navigation link.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Filter the list by category, preserving order.
#[must_use]
pub fn by_category(products: &[Product], filter: CategoryFilter) -> Vec<Product> {
    match filter {
        CategoryFilter::All => products.to_vec(),
        CategoryFilter::Only(category) => products
            .iter()
            .filter(|product| product.category == category)
            .cloned()
            .collect(),
    }
}

/// Case-insensitive substring search over name, description and seller.
///
/// The term is trimmed and lowercased first; an empty term restores the
/// full unfiltered list.
#[must_use]
pub fn by_term(products: &[Product], term: &str) -> Vec<Product> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return products.to_vec();
    }

    products
        .iter()
        .filter(|product| {
            product.name.to_lowercase().contains(&term)
                || product.description.to_lowercase().contains(&term)
                || product.seller.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}
