//! Purchase redirects to the external commerce provider.
//!
//! There is no cart: buying an item means leaving the site for the
//! provider's package page, or its storefront root when the item has no
//! known package.
use crate::catalog::{Catalog, Item};
use crate::config::StoreConfig;
use thiserror::Error;

/// Browser navigation seam; the web shell assigns `window.location`.
pub trait Navigate {
    fn navigate(&self, url: &str);
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("Store is not configured yet. Ask the admin to set OUTCRAFT_TEBEX_STORE_URL and rebuild.")]
    NotConfigured,
}

/// Why a purchase request did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    UnknownItem,
    ComingSoon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Navigated(String),
    Ignored(IgnoreReason),
}

/// Provider URL for a package, or the store root when `package` is `None`.
/// One trailing slash on `base` is dropped.
#[must_use]
pub fn purchase_url(base: &str, package: Option<u64>) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    match package {
        Some(id) => format!("{base}/package/{id}"),
        None => base.to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchaseRedirector {
    catalog: Catalog,
    config: StoreConfig,
}

impl PurchaseRedirector {
    #[must_use]
    pub const fn new(catalog: Catalog, config: StoreConfig) -> Self {
        Self { catalog, config }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Direct item reference first, then the configured mapping. A zero
    /// reference counts as absent.
    #[must_use]
    pub fn resolve_package(&self, item: &Item) -> Option<u64> {
        item.package_id
            .filter(|id| *id > 0)
            .or_else(|| self.config.packages.get(&item.id).copied())
    }

    /// Decide where buying `item_id` leads without navigating.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::NotConfigured`] when the item is purchasable
    /// but no base store URL is configured.
    pub fn plan(&self, item_id: &str) -> Result<PurchaseOutcome, PurchaseError> {
        let Some(item) = self.catalog.find(item_id) else {
            return Ok(PurchaseOutcome::Ignored(IgnoreReason::UnknownItem));
        };
        if !item.is_purchasable() {
            return Ok(PurchaseOutcome::Ignored(IgnoreReason::ComingSoon));
        }
        let package = self.resolve_package(item);
        let base = self
            .config
            .store_url
            .as_deref()
            .ok_or(PurchaseError::NotConfigured)?;
        Ok(PurchaseOutcome::Navigated(purchase_url(base, package)))
    }

    /// Buy `item_id`, navigating away on success.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::NotConfigured`] when no base store URL is
    /// configured; nothing is navigated in that case.
    pub fn buy<N>(&self, item_id: &str, navigator: &N) -> Result<PurchaseOutcome, PurchaseError>
    where
        N: Navigate + ?Sized,
    {
        let outcome = self.plan(item_id)?;
        match &outcome {
            PurchaseOutcome::Navigated(url) => {
                log::info!("redirecting purchase of {item_id} to {url}");
                navigator.navigate(url);
            }
            PurchaseOutcome::Ignored(reason) => {
                log::debug!("purchase of {item_id} ignored: {reason:?}");
            }
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, item};
    use crate::config::PackageMap;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl Navigate for Recorder {
        fn navigate(&self, url: &str) {
            self.0.borrow_mut().push(url.to_string());
        }
    }

    fn redirector(store_url: Option<&str>) -> PurchaseRedirector {
        let mut upcoming = item("legend", Category::Ranks);
        upcoming.coming_soon = true;
        let mut direct = item("coins-5k", Category::Coins);
        direct.package_id = Some(900);
        let catalog =
            Catalog::new(vec![item("vip-sub", Category::Vip), upcoming, direct]).unwrap();
        let config = StoreConfig {
            store_url: store_url.map(str::to_string),
            packages: PackageMap::from([
                ("vip-sub".to_string(), 123),
                ("coins-5k".to_string(), 1),
            ]),
        };
        PurchaseRedirector::new(catalog, config)
    }

    #[test]
    fn purchase_url_strips_one_trailing_slash() {
        assert_eq!(
            purchase_url("https://store.example/", Some(7)),
            "https://store.example/package/7"
        );
        assert_eq!(
            purchase_url("https://store.example", None),
            "https://store.example"
        );
    }

    #[test]
    fn mapped_item_navigates_to_package_page() {
        let nav = Recorder::default();
        let outcome = redirector(Some("https://store.example/"))
            .buy("vip-sub", &nav)
            .unwrap();
        assert_eq!(
            outcome,
            PurchaseOutcome::Navigated("https://store.example/package/123".into())
        );
        assert_eq!(*nav.0.borrow(), ["https://store.example/package/123"]);
    }

    #[test]
    fn direct_reference_beats_mapping() {
        let r = redirector(Some("https://store.example"));
        let item = r.catalog().find("coins-5k").unwrap();
        assert_eq!(r.resolve_package(item), Some(900));
    }

    #[test]
    fn zero_package_reference_goes_to_store_root() {
        let mut zeroed = item("vip-sub", Category::Vip);
        zeroed.package_id = Some(0);
        let mut mapped = item("knight", Category::Ranks);
        mapped.package_id = Some(0);
        let config = StoreConfig {
            store_url: Some("https://store.example".to_string()),
            packages: PackageMap::from([("knight".to_string(), 55)]),
        };
        let r = PurchaseRedirector::new(Catalog::new(vec![zeroed, mapped]).unwrap(), config);

        let nav = Recorder::default();
        r.buy("vip-sub", &nav).unwrap();
        r.buy("knight", &nav).unwrap();
        assert_eq!(
            *nav.0.borrow(),
            ["https://store.example", "https://store.example/package/55"]
        );
    }

    #[test]
    fn coming_soon_and_unknown_items_never_navigate() {
        let nav = Recorder::default();
        let r = redirector(Some("https://store.example"));
        assert_eq!(
            r.buy("legend", &nav),
            Ok(PurchaseOutcome::Ignored(IgnoreReason::ComingSoon))
        );
        assert_eq!(
            r.buy("missing", &nav),
            Ok(PurchaseOutcome::Ignored(IgnoreReason::UnknownItem))
        );
        assert!(nav.0.borrow().is_empty());
    }

    #[test]
    fn unconfigured_store_blocks_navigation() {
        let nav = Recorder::default();
        let err = redirector(None).buy("vip-sub", &nav).unwrap_err();
        assert_eq!(err, PurchaseError::NotConfigured);
        assert!(err.to_string().contains("not configured"));
        assert!(nav.0.borrow().is_empty());
    }

    #[test]
    fn coming_soon_is_ignored_even_without_config() {
        let nav = Recorder::default();
        assert_eq!(
            redirector(None).buy("legend", &nav),
            Ok(PurchaseOutcome::Ignored(IgnoreReason::ComingSoon))
        );
    }
}
