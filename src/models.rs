//! Analysis result record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::extract::{ColorSample, FontEntry, LogoCandidate};

/// The assembled brand-identity record for one analyzed page.
///
/// Created once per request and immutable once returned. Cached copies are
/// byte-identical apart from the `cached` flag, timestamp included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Normalized URL the analysis ran against
    pub url: String,
    /// og:site_name, else the bare host
    pub site_name: String,
    /// Page title (may be empty)
    pub title: String,
    /// Page description, or the placeholder when none was found
    pub description: String,
    /// Extracted tagline, when one qualified
    pub tagline: Option<String>,
    /// Chosen logo candidate (the favicon fallback guarantees one in practice)
    pub logo: Option<LogoCandidate>,
    /// Discovered fonts in discovery order (never empty; a system default is
    /// substituted when nothing was found)
    pub fonts: Vec<FontEntry>,
    /// Weighted brand colors in rank order (may be empty)
    pub colors: Vec<ColorSample>,
    /// Capture timestamp
    pub analyzed_at: DateTime<Utc>,
    /// Whether this response was served from the result cache
    pub cached: bool,
}
