//! Error types for storefront construction.

use hub_catalog::CatalogError;
use hub_core::CoreError;
use hub_sites::SiteError;
use thiserror::Error;

/// Errors raised while assembling a storefront. Page rendering itself does
/// not fail; missing records become `None`.
#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Domain table error: {0}")]
    Sites(#[from] SiteError),

    #[error("Settings error: {0}")]
    Settings(#[from] CoreError),
}
