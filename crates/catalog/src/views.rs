//! Product grid and fragment rendering.
//!
//! Rendering is a pure function of its input plus static markup - no state
//! is read behind the caller's back. Each fragment maps to the DOM subtree
//! the page re-renders after the matching event.

use askama::Template;

use crate::filters;
use crate::models::Product;
use crate::toast::Toast;

/// Product display data for the grid template.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub rating: f32,
    pub review_count: u32,
    pub description: String,
    pub seller: String,
    pub image: String,
    pub in_stock: bool,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            price: product.price.amount,
            rating: product.rating,
            review_count: product.review_count,
            description: product.description.clone(),
            seller: product.seller.clone(),
            image: product.image.clone(),
            in_stock: product.in_stock,
        }
    }
}

/// Product grid template; renders the no-results placeholder when empty.
#[derive(Template)]
#[template(path = "product_grid.html")]
pub struct ProductGridTemplate {
    pub products: Vec<ProductCardView>,
}

/// Loading placeholder shown while the catalog is being fetched.
#[derive(Template)]
#[template(path = "partials/loading.html")]
pub struct LoadingTemplate;

/// Cart count badge fragment.
#[derive(Template)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// A single toast element.
#[derive(Template)]
#[template(path = "partials/toast.html")]
pub struct ToastTemplate {
    pub kind: String,
    pub message: String,
}

/// Render the product grid for a list of products.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_products(products: &[Product]) -> askama::Result<String> {
    ProductGridTemplate {
        products: products.iter().map(ProductCardView::from).collect(),
    }
    .render()
}

/// Render the loading placeholder.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn loading_markup() -> askama::Result<String> {
    LoadingTemplate.render()
}

/// Render the cart count badge.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn cart_count_markup(count: u32) -> askama::Result<String> {
    CartCountTemplate { count }.render()
}

/// Render a toast element.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn toast_markup(toast: &Toast) -> askama::Result<String> {
    ToastTemplate {
        kind: toast.kind.to_string(),
        message: toast.message.clone(),
    }
    .render()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::source::sample_products;
    use crate::toast::ToastKind;
    use mainmarket_core::{Price, ProductId};
    use crate::models::Category;

    #[test]
    fn test_grid_renders_one_card_per_product() {
        let products = sample_products();
        let html = render_products(&products).unwrap();

        assert_eq!(html.matches("product-card").count(), 6);
        assert!(html.contains("Ankara Print Dress"));
        assert!(html.contains("₦12,500"));
        assert!(html.contains("Sold by: Ngozi&#x27;s Fashion"));
        assert!(html.contains("★★★★⯪")); // 4.5 rating row
        assert!(html.contains("(128)"));
        assert!(!html.contains("No products found"));
    }

    #[test]
    fn test_empty_grid_renders_placeholder() {
        let html = render_products(&[]).unwrap();
        assert!(html.contains("No products found"));
        assert!(html.contains("Try adjusting your search or filter criteria"));
        assert!(!html.contains("product-card"));
    }

    #[test]
    fn test_out_of_stock_card() {
        let product = Product {
            id: ProductId::new(99),
            name: "Sold Out Lamp".to_owned(),
            price: Price::naira(2000),
            category: Category::Home,
            seller: "Artisan Collective".to_owned(),
            image: "https://example.com/lamp.jpg".to_owned(),
            description: "A lamp.".to_owned(),
            rating: 4.0,
            review_count: 3,
            in_stock: false,
        };

        let html = render_products(&[product]).unwrap();
        assert!(html.contains("Out of Stock"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn test_fragments() {
        assert!(loading_markup().unwrap().contains("Loading products"));
        assert!(cart_count_markup(3).unwrap().contains('3'));

        let toast = Toast::new("Logged out successfully", ToastKind::Success);
        let html = toast_markup(&toast).unwrap();
        assert!(html.contains("toast-success"));
        assert!(html.contains("Logged out successfully"));
    }
}
