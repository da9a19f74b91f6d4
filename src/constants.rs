/// Catalog schema constants shared across the normalizer and sync client.

// Column limits enforced by the catalog; longer values are cut to the prefix
pub const TITLE_MAX_CHARS: usize = 255;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Minimum rating for a product to be flagged as featured
pub const FEATURED_RATING_MIN: f64 = 4.5;

/// Path of the catalog sync endpoint, relative to the configured base URL
pub const SYNC_ENDPOINT_PATH: &str = "/api/automation/products/sync";

/// User agent sent on every sync request
pub const SYNC_USER_AGENT: &str = "VitrineSyncBot/1.0";

// Defaults applied when config.toml is absent or partial
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Environment variable overriding the configured base URL
pub const BASE_URL_ENV: &str = "VITRINE_API_BASE";
