//! Fixed endpoints and timings for the storefront.
//!
//! Everything here is part of the published site; changing a value is a code
//! change, not a deployment setting. Deployment settings live in [`crate::config`].

// Community ----------------------------------------------------------------
pub const SERVER_ADDRESS: &str = "OUTCRAFT.NET";
pub const DISCORD_INVITE: &str = "https://discord.gg/MXDPQYMGUC";

// Server status ------------------------------------------------------------
pub const STATUS_ENDPOINT: &str = "https://mcapi.us/server/status";
pub const POLL_INTERVAL_MS: u32 = 10_000;

// Presentation -------------------------------------------------------------
pub const COPIED_FEEDBACK_MS: u32 = 1_800;
pub const FEATURED_LIMIT: usize = 6;

// Configuration keys -------------------------------------------------------
pub const ENV_PREFIX: &str = "OUTCRAFT_";
pub const STORE_URL_KEY: &str = "TEBEX_STORE_URL";
pub const PACKAGE_KEY_PREFIX: &str = "TEBEX_PKG_";
