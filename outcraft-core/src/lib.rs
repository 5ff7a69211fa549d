//! OutCraft Storefront Core
//!
//! Platform-agnostic logic behind the OutCraft community site.
//! This crate owns the catalog, the section/view state, the purchase redirect
//! rules and the server-status model without any browser dependencies.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod indicator;
pub mod purchase;
pub mod section;
pub mod status;
pub mod view;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, Category, Item};
pub use config::{ConfigSource, PackageMap, StoreConfig, package_env_key, sanitize_store_url};
pub use indicator::{ControlRect, IndicatorGeometry, LayoutSnapshot, compute_indicator};
pub use purchase::{
    IgnoreReason, Navigate, PurchaseError, PurchaseOutcome, PurchaseRedirector, purchase_url,
};
pub use section::{NAVIGATION, Section};
pub use status::{
    Players, ServerStatus, StatusDisplay, StatusError, StatusTracker, Ticket, status_url,
};
pub use view::{ViewAction, ViewState};
