use anyhow::Context;
use outcraft_core::{Catalog, PurchaseRedirector};

const CATALOG_JSON: &str = include_str!("../../static/assets/data/catalog.json");

/// Parse a catalog document, adding context for the console.
///
/// # Errors
///
/// Returns an error when the document is not a valid catalog.
pub fn load_catalog(json: &str) -> anyhow::Result<Catalog> {
    Catalog::from_json(json).context("failed to load the embedded product catalog")
}

/// Catalog plus store settings for this build.
///
/// A broken catalog is logged and replaced by an empty one so the rest of the
/// site (status, navigation, invite link) still works.
#[must_use]
pub fn load_storefront() -> PurchaseRedirector {
    let catalog = load_catalog(CATALOG_JSON).unwrap_or_else(|err| {
        log::error!("{err:#}");
        Catalog::default()
    });
    let config = crate::config::store_config(&catalog);
    log::info!(
        "storefront ready: {} items, store {}",
        catalog.len(),
        if config.is_configured() {
            "configured"
        } else {
            "not configured"
        }
    );
    PurchaseRedirector::new(catalog, config)
}
