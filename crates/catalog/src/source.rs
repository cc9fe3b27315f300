//! Product sources.
//!
//! The page fakes its catalog fetch with a hardcoded list; the trait keeps
//! that seam explicit so the failure path stays modeled and testable even
//! though the demo source cannot fail.

use thiserror::Error;

use mainmarket_core::{Price, ProductId};

use crate::models::{Category, Product};

/// The product source failed to deliver the catalog.
#[derive(Debug, Error)]
#[error("failed to load products: {0}")]
pub struct ProductSourceError(pub String);

/// Anything that can deliver the full product list.
pub trait ProductSource {
    /// Fetch the complete catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    fn fetch(&self) -> Result<Vec<Product>, ProductSourceError>;
}

/// The fixed six-product demo catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleProducts;

impl ProductSource for SampleProducts {
    fn fetch(&self) -> Result<Vec<Product>, ProductSourceError> {
        Ok(sample_products())
    }
}

/// The demo catalog: six products across five categories, all in stock.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Ankara Print Dress".to_owned(),
            price: Price::naira(12500),
            category: Category::Fashion,
            seller: "Ngozi's Fashion".to_owned(),
            image: "https://images.unsplash.com/photo-1594938371073-8b96043d18d9?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80".to_owned(),
            description: "Beautiful handmade Ankara dress with traditional patterns.".to_owned(),
            rating: 4.5,
            review_count: 128,
            in_stock: true,
        },
        Product {
            id: ProductId::new(2),
            name: "Wooden Carving Art".to_owned(),
            price: Price::naira(8500),
            category: Category::Art,
            seller: "Traditional Crafts".to_owned(),
            image: "https://images.unsplash.com/photo-1562569633-622763f1f602?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80".to_owned(),
            description: "Handcrafted wooden sculpture from local artisans.".to_owned(),
            rating: 4.8,
            review_count: 64,
            in_stock: true,
        },
        Product {
            id: ProductId::new(3),
            name: "Smartphone Android".to_owned(),
            price: Price::naira(65000),
            category: Category::Electronics,
            seller: "Tech Hub NG".to_owned(),
            image: "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80".to_owned(),
            description: "Latest Android smartphone with great features.".to_owned(),
            rating: 4.3,
            review_count: 89,
            in_stock: true,
        },
        Product {
            id: ProductId::new(4),
            name: "Traditional Spice Set".to_owned(),
            price: Price::naira(3500),
            category: Category::Food,
            seller: "Local Foods Market".to_owned(),
            image: "https://images.unsplash.com/photo-1586201375761-83865001e31c?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80".to_owned(),
            description: "Authentic Nigerian spices for traditional cooking.".to_owned(),
            rating: 4.7,
            review_count: 156,
            in_stock: true,
        },
        Product {
            id: ProductId::new(5),
            name: "Handwoven Basket".to_owned(),
            price: Price::naira(4500),
            category: Category::Home,
            seller: "Artisan Collective".to_owned(),
            image: "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80".to_owned(),
            description: "Beautiful handwoven basket for home decor.".to_owned(),
            rating: 4.6,
            review_count: 42,
            in_stock: true,
        },
        Product {
            id: ProductId::new(6),
            name: "African Print Shirt".to_owned(),
            price: Price::naira(9800),
            category: Category::Fashion,
            seller: "Modern Traditional".to_owned(),
            image: "https://images.unsplash.com/photo-1506634572416-48cdfe530110?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80".to_owned(),
            description: "Stylish African print shirt for men.".to_owned(),
            rating: 4.4,
            review_count: 93,
            in_stock: true,
        },
    ]
}
