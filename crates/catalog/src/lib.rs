//! MainMarket Catalog - marketplace product listing controller.
//!
//! Headless rendition of the marketplace listing page. The page's single
//! mutable application object becomes [`CatalogController`], which owns the
//! product list, cart, active filter and auth state, and renders the product
//! grid to HTML fragments via Askama templates.
//!
//! # Architecture
//!
//! - State lives on the controller instance - no globals, no hidden statics
//! - Persistence (current user, theme) goes through the [`KvStore`] seam
//!   from `mainmarket-core`
//! - Products come from a [`ProductSource`]; the fixed six-product demo set
//!   is the default source
//! - Every UI event maps to one controller method that mutates state and
//!   returns the re-rendered fragment for the affected subtree
//!
//! Search and category filtering are deliberately independent views over the
//! same product list - whichever ran last wins, exactly like the page.
//!
//! [`KvStore`]: mainmarket_core::KvStore

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod cart;
pub mod controller;
pub mod error;
pub mod filters;
pub mod models;
pub mod search;
pub mod source;
pub mod stars;
pub mod theme;
pub mod toast;
pub mod views;

pub use auth::AuthControls;
pub use cart::{Cart, CartItem};
pub use controller::{CatalogConfig, CatalogController};
pub use error::CatalogError;
pub use models::{Category, CurrentUser, Product};
pub use search::CategoryFilter;
pub use source::{ProductSource, ProductSourceError, SampleProducts};
pub use stars::StarRating;
pub use theme::Theme;
pub use toast::{Toast, ToastHost, ToastKind};
