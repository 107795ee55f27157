//! Parsed markup model.
//!
//! Wraps a parsed HTML document together with its base URL and exposes the
//! queries the extractors share: meta tag lookup, first-element text,
//! relative URL resolution, and the CSS source inventory. The document is
//! owned by the request that fetched it and is confined to the synchronous
//! extraction phase - it is never held across an await.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::config::MAX_STYLESHEET_FETCHES;
use crate::utils::{collapse_whitespace, parse_selector_unsafe};

static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("meta[content]", "META_SELECTOR"));
static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("title", "TITLE_SELECTOR"));
static STYLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("style", "STYLE_SELECTOR"));
static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("link[href]", "LINK_SELECTOR"));

/// CSS sources discovered on a page, collected before any stylesheet fetch.
///
/// Holding these as owned strings lets the document be dropped before the
/// network phase begins.
#[derive(Debug, Clone, Default)]
pub struct CssInventory {
    /// Contents of inline `<style>` blocks, in document order
    pub inline_blocks: Vec<String>,
    /// Resolved `link[rel=stylesheet]` hrefs, capped at the fetch limit
    pub stylesheet_urls: Vec<String>,
    /// Raw hrefs of Google Fonts `<link>` tags (family lists are parsed from
    /// the query string, so these stay unresolved)
    pub google_font_links: Vec<String>,
}

/// A parsed HTML document plus the base URL it was fetched from.
pub struct MarkupDocument {
    html: Html,
    base: Url,
}

impl MarkupDocument {
    /// Parses fetched HTML into a queryable document.
    ///
    /// Malformed HTML never fails here; html5ever recovers into whatever tree
    /// it can, and missing elements simply yield absent query results.
    pub fn parse(html_text: &str, base: Url) -> Self {
        MarkupDocument {
            html: Html::parse_document(html_text),
            base,
        }
    }

    /// The underlying parsed document, for extractor-local selectors.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// The base URL of the page.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// The page host.
    pub fn host(&self) -> &str {
        self.base.host_str().unwrap_or_default()
    }

    /// Looks up a `<meta>` tag's content by `property` attribute
    /// (Open Graph convention, e.g. `og:title`).
    pub fn meta_property(&self, property: &str) -> Option<String> {
        self.meta_content("property", property)
    }

    /// Looks up a `<meta>` tag's content by `name` attribute
    /// (e.g. `description`, `twitter:image`).
    pub fn meta_name(&self, name: &str) -> Option<String> {
        self.meta_content("name", name)
    }

    fn meta_content(&self, attr: &str, value: &str) -> Option<String> {
        self.html.select(&META_SELECTOR).find_map(|element| {
            let tag = element.value();
            if tag.attr(attr)?.eq_ignore_ascii_case(value) {
                tag.attr("content")
                    .map(|content| content.trim().to_string())
                    .filter(|content| !content.is_empty())
            } else {
                None
            }
        })
    }

    /// Text of the `<title>` element, whitespace-collapsed.
    pub fn title_text(&self) -> Option<String> {
        self.first_text(&TITLE_SELECTOR)
    }

    /// Collapsed text of the first element matching `selector`, if non-empty.
    pub fn first_text(&self, selector: &Selector) -> Option<String> {
        self.html
            .select(selector)
            .next()
            .map(element_text)
            .filter(|text| !text.is_empty())
    }

    /// Resolves a possibly-relative href against the page base URL.
    ///
    /// Handles absolute, protocol-relative (`//cdn...`), root-relative, and
    /// path-relative forms. Unresolvable hrefs yield `None` and are dropped
    /// by the callers.
    pub fn resolve(&self, href: &str) -> Option<String> {
        let trimmed = href.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.base.join(trimmed).ok().map(|u| u.to_string())
    }

    /// Iterates `<link href>` elements as (lowercased rel, href) pairs.
    pub fn links(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.html.select(&LINK_SELECTOR).filter_map(|element| {
            let tag = element.value();
            let href = tag.attr("href")?;
            let rel = tag.attr("rel").unwrap_or_default().to_lowercase();
            Some((rel, href))
        })
    }

    /// Collects the CSS sources the font and color extractors consume.
    ///
    /// Stylesheet hrefs are resolved against the base URL and capped at the
    /// first `MAX_STYLESHEET_FETCHES` found; Google Fonts links are kept
    /// separately because their family lists come from the href itself.
    pub fn css_inventory(&self) -> CssInventory {
        let inline_blocks: Vec<String> = self
            .html
            .select(&STYLE_SELECTOR)
            .map(|element| element.text().collect::<String>())
            .filter(|css| !css.trim().is_empty())
            .collect();

        let mut stylesheet_urls = Vec::new();
        let mut google_font_links = Vec::new();
        for (rel, href) in self.links() {
            if href.contains("fonts.googleapis.com") {
                google_font_links.push(href.to_string());
            }
            let is_stylesheet = rel.split_whitespace().any(|word| word == "stylesheet");
            if is_stylesheet && stylesheet_urls.len() < MAX_STYLESHEET_FETCHES {
                if let Some(resolved) = self.resolve(href) {
                    stylesheet_urls.push(resolved);
                }
            }
        }

        log::debug!(
            "CSS inventory: {} inline block(s), {} stylesheet(s), {} Google Fonts link(s)",
            inline_blocks.len(),
            stylesheet_urls.len(),
            google_font_links.len()
        );

        CssInventory {
            inline_blocks,
            stylesheet_urls,
            google_font_links,
        }
    }
}

/// Collapsed text content of an element, entities and nested tags included.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}
