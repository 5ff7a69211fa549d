//! Deployment settings captured by `build.rs`.
use outcraft_core::{Catalog, PackageMap, StoreConfig};

include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

/// `OUTCRAFT_*` variables present when the bundle was built.
#[must_use]
pub const fn build_env() -> &'static [(&'static str, &'static str)] {
    BUILD_ENV
}

/// Package ids kept in code. Environment overrides win over these.
#[must_use]
pub fn fallback_packages() -> PackageMap {
    PackageMap::new()
}

/// Store settings for `catalog` from the build-time environment.
#[must_use]
pub fn store_config(catalog: &Catalog) -> StoreConfig {
    StoreConfig::from_source(build_env(), catalog, &fallback_packages())
}
