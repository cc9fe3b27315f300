//! Marketplace page commands.

use std::fmt::Write as _;

use mainmarket_catalog::{CatalogConfig, CatalogController, CategoryFilter, SampleProducts};
use mainmarket_core::ProductId;

use crate::store::JsonFileStore;

type CommandResult = Result<String, Box<dyn std::error::Error>>;

/// Load the demo catalog, apply an optional filter or search, and render
/// the product grid.
///
/// Category and search are independent; passing both applies only the
/// search, matching the page where the last action wins.
///
/// # Errors
///
/// Returns an error for an unknown category name or if loading fails.
pub fn products(
    store: JsonFileStore,
    config: CatalogConfig,
    category: Option<&str>,
    search: Option<&str>,
) -> CommandResult {
    let mut catalog = CatalogController::new(store, config);
    let mut markup = catalog.init(&SampleProducts)?;

    if let Some(raw) = category {
        let filter = CategoryFilter::parse(raw)
            .ok_or_else(|| format!("unknown category: {raw}"))?;
        markup = catalog.filter_by_category(filter)?;
    }
    if let Some(term) = search {
        markup = catalog.search(term)?;
    }

    Ok(markup)
}

/// Add products to the cart and report the badge plus toasts.
///
/// # Errors
///
/// Returns an error if loading or rendering fails.
pub fn add(store: JsonFileStore, config: CatalogConfig, ids: &[i32]) -> CommandResult {
    let mut catalog = CatalogController::new(store, config);
    catalog.init(&SampleProducts)?;

    for id in ids {
        catalog.add_to_cart(ProductId::from(*id));
    }

    let mut out = catalog.cart_count_markup()?;
    for toast in catalog.toasts().iter() {
        let _ = writeln!(out, "\n[{}] {}", toast.kind, toast.message);
    }
    Ok(out)
}
