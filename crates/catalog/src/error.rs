//! Catalog error types.
//!
//! Nothing here is fatal to the page: callers surface these as transient
//! toasts or log lines and carry on.

use thiserror::Error;

use mainmarket_core::StorageError;

use crate::source::ProductSourceError;

/// Application-level error type for the catalog controller.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Key-value storage failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The product source failed to deliver the catalog.
    #[error(transparent)]
    Source(#[from] ProductSourceError),

    /// Template rendering failed.
    #[error("template error: {0}")]
    Render(#[from] askama::Error),
}

/// Result type alias for `CatalogError`.
pub type Result<T> = std::result::Result<T, CatalogError>;
