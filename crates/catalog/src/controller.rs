//! The catalog page controller.

use std::time::Instant;

use url::Url;

use mainmarket_core::{KvStore, ProductId};

use crate::auth::{self, AuthControls, LOGIN_STUB_NOTICE, REGISTER_STUB_NOTICE};
use crate::cart::Cart;
use crate::error::Result;
use crate::models::{CurrentUser, Product};
use crate::search::{self, CategoryFilter};
use crate::source::ProductSource;
use crate::theme::{self, Theme};
use crate::toast::{Toast, ToastHost, ToastKind};
use crate::views;

/// Notice shown by the cart view stub.
pub const CART_STUB_NOTICE: &str = "Cart would appear here";

/// Notice shown by the wishlist view stub.
pub const WISHLIST_STUB_NOTICE: &str = "Wishlist would appear here";

const DEFAULT_VIDEO_CHAT_URL: &str = "https://mainmarket.example/video-chat";

/// Catalog controller configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the video-chat destination; product and seller are
    /// appended as query parameters.
    pub video_chat_url: Url,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            video_chat_url: Url::parse(DEFAULT_VIDEO_CHAT_URL)
                .expect("default video chat URL is valid"),
        }
    }
}

/// The marketplace listing page controller.
///
/// Owns all state the page holds on its single application object: the
/// product list, cart, wishlist stub, active category filter, auth state
/// and pending toasts. UI events become method calls; each mutating method
/// re-renders the affected fragment and returns it.
pub struct CatalogController<S: KvStore> {
    store: S,
    config: CatalogConfig,
    products: Vec<Product>,
    cart: Cart,
    wishlist: Vec<ProductId>,
    category: CategoryFilter,
    current_user: Option<CurrentUser>,
    toasts: ToastHost,
}

impl<S: KvStore> CatalogController<S> {
    /// Create a controller with an empty catalog and cart.
    pub fn new(store: S, config: CatalogConfig) -> Self {
        Self {
            store,
            config,
            products: Vec::new(),
            cart: Cart::new(),
            wishlist: Vec::new(),
            category: CategoryFilter::All,
            current_user: None,
            toasts: ToastHost::new(),
        }
    }

    /// Page init: restore auth state, then load and render the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails, the source fails, or rendering
    /// fails; a source failure has already been surfaced as an error toast.
    pub fn init(&mut self, source: &dyn ProductSource) -> Result<String> {
        self.check_auth_state()?;
        self.load_products(source)
    }

    // =========================================================================
    // Products, filtering, search
    // =========================================================================

    /// The loading placeholder shown before the catalog arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn loading_markup(&self) -> Result<String> {
        views::loading_markup().map_err(Into::into)
    }

    /// Replace the product list from `source` and render the full grid.
    ///
    /// Safe to call repeatedly - the list is fully replaced each time. On
    /// source failure an error toast is queued and the error propagated.
    ///
    /// # Errors
    ///
    /// Returns an error if the source or rendering fails.
    pub fn load_products(&mut self, source: &dyn ProductSource) -> Result<String> {
        match source.fetch() {
            Ok(products) => {
                tracing::info!(count = products.len(), "products loaded");
                self.products = products;
                Ok(views::render_products(&self.products)?)
            }
            Err(err) => {
                tracing::error!(error = %err, "error loading products");
                self.show_toast("Failed to load products", ToastKind::Error);
                Err(err.into())
            }
        }
    }

    /// The full, unfiltered product list.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Set the active category and render the filtered grid.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn filter_by_category(&mut self, filter: CategoryFilter) -> Result<String> {
        self.category = filter;
        let filtered = search::by_category(&self.products, filter);
        tracing::debug!(category = %filter, count = filtered.len(), "category filter applied");
        Ok(views::render_products(&filtered)?)
    }

    /// The category whose navigation link is marked active.
    #[must_use]
    pub const fn active_category(&self) -> CategoryFilter {
        self.category
    }

    /// Run a text search and render the matching grid.
    ///
    /// An empty or whitespace term restores the full list. The active
    /// category is intentionally ignored - search and category filtering
    /// are independent, last-action-wins views.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn search(&mut self, term: &str) -> Result<String> {
        let hits = search::by_term(&self.products, term);
        tracing::debug!(term = term.trim(), count = hits.len(), "search applied");
        Ok(views::render_products(&hits)?)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add one unit of a product to the cart and queue a success toast.
    ///
    /// An unknown product ID is a silent no-op.
    pub fn add_to_cart(&mut self, product_id: ProductId) {
        let Some(product) = self.products.iter().find(|p| p.id == product_id).cloned() else {
            tracing::debug!(%product_id, "add_to_cart ignored unknown product");
            return;
        };

        self.cart.add(&product);
        let message = format!("{} added to cart", product.name);
        self.show_toast(&message, ToastKind::Success);
    }

    /// The session cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Total units in the cart, as shown on the badge.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Render the cart count badge.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn cart_count_markup(&self) -> Result<String> {
        views::cart_count_markup(self.cart_count()).map_err(Into::into)
    }

    /// The cart view stub.
    #[must_use]
    pub const fn show_cart(&self) -> &'static str {
        CART_STUB_NOTICE
    }

    /// The wishlist view stub; the wishlist itself never gains entries.
    #[must_use]
    pub const fn show_wishlist(&self) -> &'static str {
        WISHLIST_STUB_NOTICE
    }

    /// Wishlist contents (always empty in the current scope).
    #[must_use]
    pub fn wishlist(&self) -> &[ProductId] {
        &self.wishlist
    }

    // =========================================================================
    // Video chat
    // =========================================================================

    /// Navigation target for a video chat about a product.
    ///
    /// Carries the product ID and seller name as query parameters. An
    /// unknown product ID is a silent no-op (`None`).
    #[must_use]
    pub fn start_video_chat(&self, product_id: ProductId) -> Option<Url> {
        let product = self.products.iter().find(|p| p.id == product_id)?;

        let mut url = self.config.video_chat_url.clone();
        url.query_pairs_mut()
            .append_pair("product", &product.id.to_string())
            .append_pair("seller", &product.seller);
        Some(url)
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Restore the logged-in user from storage.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn check_auth_state(&mut self) -> Result<()> {
        self.current_user = auth::load_current_user(&self.store)?;
        Ok(())
    }

    /// The logged-in user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&CurrentUser> {
        self.current_user.as_ref()
    }

    /// Visibility of the login/register/logout controls.
    #[must_use]
    pub const fn auth_controls(&self) -> AuthControls {
        AuthControls::for_user(self.current_user())
    }

    /// Login stub.
    #[must_use]
    pub const fn show_login_modal(&self) -> &'static str {
        LOGIN_STUB_NOTICE
    }

    /// Register stub.
    #[must_use]
    pub const fn show_register_modal(&self) -> &'static str {
        REGISTER_STUB_NOTICE
    }

    /// Clear the logged-in user and queue a confirmation toast.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    pub fn handle_logout(&mut self) -> Result<()> {
        self.current_user = None;
        auth::clear_current_user(&mut self.store)?;
        self.show_toast("Logged out successfully", ToastKind::Success);
        Ok(())
    }

    // =========================================================================
    // Toasts and theme
    // =========================================================================

    /// Queue a transient toast.
    pub fn show_toast(&mut self, message: &str, kind: ToastKind) {
        self.toasts.push(Toast::new(message, kind), Instant::now());
    }

    /// Pending toasts.
    #[must_use]
    pub const fn toasts(&self) -> &ToastHost {
        &self.toasts
    }

    /// Resolve the active theme (see [`theme::load`]).
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn theme(&self, prefers_dark: bool) -> Result<Theme> {
        theme::load(&self.store, prefers_dark).map_err(Into::into)
    }

    /// Flip and persist the theme.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub fn toggle_theme(&mut self, prefers_dark: bool) -> Result<Theme> {
        let current = theme::load(&self.store, prefers_dark)?;
        theme::toggle(&mut self.store, current).map_err(Into::into)
    }

    /// The underlying store (primarily for tests and the CLI demo).
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::source::{ProductSourceError, SampleProducts};
    use mainmarket_core::{MemoryStore, UserId};

    struct FailingSource;

    impl ProductSource for FailingSource {
        fn fetch(&self) -> std::result::Result<Vec<Product>, ProductSourceError> {
            Err(ProductSourceError("catalog service unreachable".to_owned()))
        }
    }

    fn controller() -> CatalogController<MemoryStore> {
        let mut controller =
            CatalogController::new(MemoryStore::new(), CatalogConfig::default());
        controller.init(&SampleProducts).unwrap();
        controller
    }

    #[test]
    fn test_init_loads_demo_catalog() {
        let controller = controller();
        assert_eq!(controller.products().len(), 6);
        assert_eq!(controller.active_category(), CategoryFilter::All);
        assert_eq!(controller.cart_count(), 0);
    }

    #[test]
    fn test_load_products_is_idempotent() {
        let mut controller = controller();
        controller.load_products(&SampleProducts).unwrap();
        controller.load_products(&SampleProducts).unwrap();
        assert_eq!(controller.products().len(), 6);
    }

    #[test]
    fn test_load_failure_queues_error_toast() {
        let mut controller = controller();
        let result = controller.load_products(&FailingSource);

        assert!(result.is_err());
        let messages: Vec<&str> = controller
            .toasts()
            .iter()
            .map(|t| t.message.as_str())
            .collect();
        assert_eq!(messages, vec!["Failed to load products"]);
    }

    #[test]
    fn test_category_filter_updates_active_link() {
        let mut controller = controller();
        let html = controller
            .filter_by_category(CategoryFilter::Only(Category::Fashion))
            .unwrap();

        assert_eq!(
            controller.active_category(),
            CategoryFilter::Only(Category::Fashion)
        );
        assert_eq!(html.matches("product-card").count(), 2);
        assert!(html.contains("Ankara Print Dress"));
        assert!(html.contains("African Print Shirt"));
    }

    #[test]
    fn test_search_ignores_active_category() {
        let mut controller = controller();
        controller
            .filter_by_category(CategoryFilter::Only(Category::Fashion))
            .unwrap();

        // A search for an electronics product still matches: the filters
        // do not compose.
        let html = controller.search("smartphone").unwrap();
        assert!(html.contains("Smartphone Android"));

        // The category state is untouched by the search.
        assert_eq!(
            controller.active_category(),
            CategoryFilter::Only(Category::Fashion)
        );
    }

    #[test]
    fn test_add_to_cart_twice_merges_lines() {
        let mut controller = controller();
        controller.add_to_cart(ProductId::new(1));
        controller.add_to_cart(ProductId::new(1));

        assert_eq!(controller.cart().items().len(), 1);
        assert_eq!(controller.cart_count(), 2);
        assert!(controller.cart_count_markup().unwrap().contains('2'));

        let messages: Vec<&str> = controller
            .toasts()
            .iter()
            .map(|t| t.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Ankara Print Dress added to cart",
                "Ankara Print Dress added to cart"
            ]
        );
    }

    #[test]
    fn test_add_unknown_product_is_silent_noop() {
        let mut controller = controller();
        controller.add_to_cart(ProductId::new(999));

        assert_eq!(controller.cart_count(), 0);
        assert!(controller.toasts().is_empty());
    }

    #[test]
    fn test_video_chat_url_carries_product_and_seller() {
        let controller = controller();
        let url = controller.start_video_chat(ProductId::new(1)).unwrap();

        assert_eq!(url.host_str(), Some("mainmarket.example"));
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("product".to_owned(), "1".to_owned()),
                ("seller".to_owned(), "Ngozi's Fashion".to_owned())
            ]
        );

        assert!(controller.start_video_chat(ProductId::new(999)).is_none());
    }

    #[test]
    fn test_logout_clears_user_and_storage() {
        let mut controller = controller();
        let user = CurrentUser {
            id: UserId::new(1),
            name: "Ngozi".to_owned(),
            email: "ngozi@example.com".to_owned(),
        };
        auth::store_current_user(controller.store_mut(), &user).unwrap();
        controller.check_auth_state().unwrap();
        assert!(controller.auth_controls().show_logout);

        controller.handle_logout().unwrap();

        assert!(controller.current_user().is_none());
        assert!(controller.auth_controls().show_login);
        assert!(
            auth::load_current_user(controller.store_mut())
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_stub_notices() {
        let controller = controller();
        assert_eq!(controller.show_login_modal(), LOGIN_STUB_NOTICE);
        assert_eq!(controller.show_register_modal(), REGISTER_STUB_NOTICE);
        assert_eq!(controller.show_cart(), CART_STUB_NOTICE);
        assert_eq!(controller.show_wishlist(), WISHLIST_STUB_NOTICE);
        assert!(controller.wishlist().is_empty());
    }
}
