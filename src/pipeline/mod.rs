//! Analysis pipeline orchestration.
//!
//! Wires the normalizer, fetcher, markup model, extractors, and cache into
//! the single `analyze` operation. The parsed document is confined to a
//! synchronous extraction phase; only the stylesheet fetches are awaited.

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};

use crate::cache::ResultCache;
use crate::config::{Config, FALLBACK_DESCRIPTION, FALLBACK_FONT_NAME, FONT_SAMPLE_TEXT};
use crate::error_handling::{
    AnalysisError, InitializationError, ProcessingStats, WarningType,
};
use crate::extract::{
    extract_colors, extract_fonts, extract_logo, extract_metadata, extract_tagline, FontCategory,
    FontEntry,
};
use crate::fetch::{fetch_page, fetch_stylesheets};
use crate::markup::MarkupDocument;
use crate::models::AnalysisResult;
use crate::normalize::NormalizedUrl;

/// Priority of the synthesized favicon fallback logo candidate.
const FAVICON_FALLBACK_PRIORITY: u8 = 7;

/// The brand analysis pipeline.
///
/// Holds the HTTP clients, the result cache, and the warning statistics.
/// Analyses of different URLs share nothing mutable beyond the cache, so one
/// analyzer can serve concurrent requests.
pub struct BrandAnalyzer {
    page_client: Arc<reqwest::Client>,
    stylesheet_client: Arc<reqwest::Client>,
    cache: Arc<ResultCache>,
    stats: Arc<ProcessingStats>,
}

impl BrandAnalyzer {
    /// Builds an analyzer with a fresh default-TTL cache.
    ///
    /// # Errors
    ///
    /// Returns an error when an HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        Self::with_cache(config, Arc::new(ResultCache::new()))
    }

    /// Builds an analyzer around an explicitly provided cache.
    ///
    /// The cache is a constructor argument rather than a global so embedders
    /// control its lifetime and tests control its TTL.
    ///
    /// # Errors
    ///
    /// Returns an error when an HTTP client cannot be constructed.
    pub fn with_cache(
        config: &Config,
        cache: Arc<ResultCache>,
    ) -> Result<Self, InitializationError> {
        Ok(BrandAnalyzer {
            page_client: crate::initialization::init_page_client(config)?,
            stylesheet_client: crate::initialization::init_stylesheet_client(config)?,
            cache,
            stats: Arc::new(ProcessingStats::new()),
        })
    }

    /// Warning statistics accumulated across analyses.
    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }

    /// Analyzes one page and returns its brand-identity record.
    ///
    /// A repeated request for the same normalized URL within the cache window
    /// returns the stored record (timestamp included) flagged as a cache hit,
    /// with no network access.
    ///
    /// # Errors
    ///
    /// Only URL validation and the primary page fetch can fail an analysis;
    /// see [`AnalysisError`] for the kinds. Missing markup and stylesheet
    /// failures degrade individual signals instead.
    pub async fn analyze(&self, raw_url: &str) -> Result<AnalysisResult, AnalysisError> {
        let normalized = NormalizedUrl::parse(raw_url)?;

        if let Some(mut hit) = self.cache.get(normalized.as_str()) {
            debug!("Cache hit for {}", normalized);
            hit.cached = true;
            return Ok(hit);
        }

        info!("Analyzing {}", normalized);
        let html = fetch_page(&self.page_client, normalized.as_str()).await?;

        // Synchronous extraction phase; the parsed document is dropped before
        // the stylesheet fetches are awaited
        let (metadata, tagline, logo, inventory) = {
            let doc = MarkupDocument::parse(&html, normalized.url().clone());
            let metadata = extract_metadata(&doc, &self.stats);
            let tagline = extract_tagline(&doc);
            let logo = extract_logo(&doc);
            let inventory = doc.css_inventory();
            (metadata, tagline, logo, inventory)
        };

        let page_has_logo_markup = logo
            .as_ref()
            .map(|candidate| candidate.priority < FAVICON_FALLBACK_PRIORITY)
            .unwrap_or(false);
        if !page_has_logo_markup {
            self.stats.increment_warning(WarningType::MissingLogoMarkup);
        }

        let fetched_sheets =
            fetch_stylesheets(&self.stylesheet_client, &inventory.stylesheet_urls).await;

        // Inline blocks come first so discovery order favors page-local CSS
        let mut css_sources = inventory.inline_blocks;
        css_sources.extend(fetched_sheets);

        let fonts = extract_fonts(&inventory.google_font_links, &css_sources);
        let colors = extract_colors(&css_sources);

        if fonts.is_empty() {
            self.stats.increment_warning(WarningType::NoFontsFound);
        }
        if colors.is_empty() {
            self.stats.increment_warning(WarningType::NoColorsFound);
        }

        let fonts = if fonts.is_empty() {
            vec![system_default_font()]
        } else {
            fonts
        };
        let description = if metadata.description.is_empty() {
            FALLBACK_DESCRIPTION.to_string()
        } else {
            metadata.description
        };

        let result = AnalysisResult {
            url: normalized.as_str().to_string(),
            site_name: metadata.site_name,
            title: metadata.title,
            description,
            tagline,
            logo,
            fonts,
            colors,
            analyzed_at: Utc::now(),
            cached: false,
        };

        self.cache
            .insert(normalized.as_str().to_string(), result.clone());

        debug!(
            "Finished {}: {} font(s), {} color(s)",
            normalized,
            result.fonts.len(),
            result.colors.len()
        );
        Ok(result)
    }
}

/// Placeholder entry representing the platform default font.
fn system_default_font() -> FontEntry {
    FontEntry {
        name: FALLBACK_FONT_NAME.to_string(),
        category: FontCategory::SansSerif,
        sample: FONT_SAMPLE_TEXT.to_string(),
    }
}
