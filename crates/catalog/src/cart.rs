//! Session cart.
//!
//! Held in memory for the session only - there is no remove-from-cart
//! operation and nothing is persisted, matching the page's scope.

use mainmarket_core::{CurrencyCode, Price, ProductId};

use crate::models::Product;

/// A product line in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    /// The product as it was when first added.
    pub product: Product,
    /// Positive quantity; repeat adds increment this.
    pub quantity: u32,
}

impl CartItem {
    /// Line total (price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        Price::new(
            self.product.price.amount * i64::from(self.quantity),
            self.product.price.currency,
        )
    }
}

/// The session cart.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// A product already in the cart gets its quantity incremented; a new
    /// product is appended as a line with quantity 1. Returns the line's
    /// new quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
            item.quantity
        } else {
            self.items.push(CartItem {
                product: product.clone(),
                quantity: 1,
            });
            1
        }
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Total units across all lines - the number shown on the cart badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line totals.
    ///
    /// The demo catalog is single-currency; an empty cart reports a zero
    /// naira subtotal.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        let currency = self
            .items
            .first()
            .map_or(CurrencyCode::NGN, |item| item.product.price.currency);
        let amount = self.items.iter().map(|item| item.line_total().amount).sum();
        Price::new(amount, currency)
    }
}
