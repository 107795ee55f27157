//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the
//! pipeline, including timeouts, size limits, and extraction thresholds.

use std::time::Duration;

// Network operation timeouts
/// Primary page fetch timeout in seconds
/// Slow marketing sites with heavy above-the-fold assets can take several
/// seconds to first byte; 12s gives them room without hanging a request
pub const PAGE_FETCH_TIMEOUT_SECS: u64 = 12;
/// Stylesheet fetch timeout in seconds
/// Stylesheets are auxiliary input; fail faster than the primary page
pub const STYLESHEET_FETCH_TIMEOUT_SECS: u64 = 8;

// Redirect handling
/// Maximum number of redirect hops to follow for the primary page
/// Prevents infinite redirect loops and excessive request chains
pub const MAX_REDIRECT_HOPS: usize = 5;

/// Maximum URL length (2048 characters) to prevent DoS via extremely long URLs.
/// Matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Default User-Agent string for HTTP requests.
///
/// Identifies the tool by name with a contact URL rather than impersonating a
/// browser, so site operators can see who is fetching their page and reach us.
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; brand-probe/0.1; +https://github.com/brand-probe/brand_probe)";

// Extraction caps
/// Maximum number of external stylesheets fetched per analysis
/// The first few sheets carry the theme; fetching every sheet on asset-heavy
/// pages multiplies latency for little signal
pub const MAX_STYLESHEET_FETCHES: usize = 3;
/// Maximum number of distinct font entries returned
pub const MAX_FONT_ENTRIES: usize = 6;
/// Maximum number of color samples returned
pub const MAX_COLOR_ENTRIES: usize = 8;

// Font name filtering
/// Minimum accepted font family name length in characters
pub const FONT_NAME_MIN_LENGTH: usize = 2;
/// Maximum accepted font family name length in characters
pub const FONT_NAME_MAX_LENGTH: usize = 59;
/// Fixed sample string attached to every font entry for display purposes
pub const FONT_SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog";
/// Placeholder family substituted when no fonts are found (the CSS keyword
/// for the platform UI font)
pub const FALLBACK_FONT_NAME: &str = "system-ui";

// Color filtering
/// Mean channel brightness (0-255) above which a color is treated as
/// near-white structural chrome and excluded
pub const NEAR_WHITE_BRIGHTNESS: f64 = 230.0;
/// Mean channel brightness (0-255) below which a color is treated as
/// near-black structural chrome and excluded
pub const NEAR_BLACK_BRIGHTNESS: f64 = 25.0;
/// Accumulated weight above which a color is labeled Primary in the first
/// labeling pass
pub const PRIMARY_WEIGHT_THRESHOLD: u32 = 5;
/// Accumulated weight above which a color is labeled Secondary in the first
/// labeling pass
pub const SECONDARY_WEIGHT_THRESHOLD: u32 = 2;

// Tagline length gates
/// Minimum accepted tagline length in characters
pub const TAGLINE_MIN_LENGTH: usize = 4;
/// Maximum accepted tagline length in characters
pub const TAGLINE_MAX_LENGTH: usize = 200;
/// Maximum og:/twitter:description length accepted as a tagline fallback
pub const TAGLINE_DESCRIPTION_MAX_LENGTH: usize = 120;
/// Maximum h1 text length accepted as a tagline fallback
pub const TAGLINE_H1_MAX_LENGTH: usize = 150;

/// Placeholder substituted when a page carries no usable description
pub const FALLBACK_DESCRIPTION: &str = "No description available";

// Result cache
/// Lifetime of a cached analysis result
/// Brand signals change rarely; 5 minutes bounds staleness while absorbing
/// repeated lookups of the same site
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);
