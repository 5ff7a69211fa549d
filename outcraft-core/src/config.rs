//! Deployment settings for the commerce provider.
//!
//! Settings come from a [`ConfigSource`], keyed by full variable name
//! (`OUTCRAFT_TEBEX_STORE_URL`, `OUTCRAFT_TEBEX_PKG_<ITEM>`). The web shell
//! captures them at build time; tests use in-memory maps.
use crate::catalog::Catalog;
use crate::constants::{ENV_PREFIX, PACKAGE_KEY_PREFIX, STORE_URL_KEY};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};

/// Item id to commerce package id.
pub type PackageMap = BTreeMap<String, u64>;

static NON_ALNUM_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("static pattern compiles"));
static EDGE_QUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^['"]|['"]$"#).expect("static pattern compiles"));

/// Read-only lookup of configuration values by variable name.
pub trait ConfigSource {
    fn var(&self, key: &str) -> Option<String>;
}

impl ConfigSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl ConfigSource for [(&str, &str)] {
    fn var(&self, key: &str) -> Option<String> {
        self.iter()
            .find_map(|(name, value)| (*name == key).then(|| (*value).to_string()))
    }
}

/// Configuration key for an item's package override, without the
/// `OUTCRAFT_` prefix: `vip-sub` becomes `TEBEX_PKG_VIP_SUB`.
#[must_use]
pub fn package_env_key(item_id: &str) -> String {
    let normalized = NON_ALNUM_RUN.replace_all(item_id, "_").to_uppercase();
    format!("{PACKAGE_KEY_PREFIX}{normalized}")
}

/// Strip surrounding whitespace and one leading/trailing quote.
/// Empty results count as unset.
#[must_use]
pub fn sanitize_store_url(raw: &str) -> Option<String> {
    let cleaned = EDGE_QUOTE.replace_all(raw.trim(), "");
    let cleaned = cleaned.trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

fn parse_package_id(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|id| *id > 0)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Base store URL; `None` when the deployment has not configured one
    pub store_url: Option<String>,
    pub packages: PackageMap,
}

impl StoreConfig {
    /// Assemble settings for `catalog`, letting positive numeric overrides
    /// from `source` win over `fallback` entries for the same item.
    pub fn from_source<S>(source: &S, catalog: &Catalog, fallback: &PackageMap) -> Self
    where
        S: ConfigSource + ?Sized,
    {
        let store_url = source
            .var(&format!("{ENV_PREFIX}{STORE_URL_KEY}"))
            .and_then(|raw| sanitize_store_url(&raw));

        let mut packages = fallback.clone();
        for item in catalog.list() {
            let key = format!("{ENV_PREFIX}{}", package_env_key(&item.id));
            if let Some(id) = source.var(&key).as_deref().and_then(parse_package_id) {
                packages.insert(item.id.clone(), id);
            }
        }

        if store_url.is_none() {
            log::warn!("{ENV_PREFIX}{STORE_URL_KEY} is not set; purchases are disabled");
        }
        log::debug!("resolved {} package mappings", packages.len());

        Self {
            store_url,
            packages,
        }
    }

    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.store_url.is_some()
    }
}
