//! Logo candidate extraction.
//!
//! Builds an ordered candidate list from the page's logo-bearing markup and
//! picks the most trustworthy fetchable one. Lower priority number = higher
//! preference. The synthesized `/favicon.ico` candidate is always generated,
//! so a page with no logo markup at all still yields a usable URL.

use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

use crate::markup::MarkupDocument;
use crate::utils::parse_selector_unsafe;

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("img", "IMG_SELECTOR"));
static SVG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("svg[class]", "SVG_SELECTOR"));

/// A ranked logo guess.
///
/// `url` is `None` only for inline SVG hits, which flag a logo's presence
/// without offering a fetchable asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoCandidate {
    /// Resolved absolute URL of the asset, when one exists
    pub url: Option<String>,
    /// Markup the candidate came from (e.g. "og:image", "favicon")
    pub source: String,
    /// Rank; lower is more trustworthy
    pub priority: u8,
}

impl LogoCandidate {
    fn new(url: Option<String>, source: &str, priority: u8) -> Self {
        LogoCandidate {
            url,
            source: source.to_string(),
            priority,
        }
    }
}

/// Chooses the page's logo.
///
/// Scans sources in priority order: og:image (1), twitter:image (2),
/// apple-touch-icon links (3), `<img>` elements with "logo" in
/// src/alt/class/id (4), inline `<svg>` with a "logo" class (5, no URL),
/// the first icon link (6), and the synthesized origin `/favicon.ico` (7).
/// Relative URLs are resolved against the page base; unresolvable ones are
/// dropped. Returns the first candidate carrying a URL.
pub fn extract_logo(doc: &MarkupDocument) -> Option<LogoCandidate> {
    let mut candidates = Vec::new();

    if let Some(content) = doc.meta_property("og:image") {
        if let Some(url) = doc.resolve(&content) {
            candidates.push(LogoCandidate::new(Some(url), "og:image", 1));
        }
    }

    if let Some(content) = doc
        .meta_name("twitter:image")
        .or_else(|| doc.meta_property("twitter:image"))
    {
        if let Some(url) = doc.resolve(&content) {
            candidates.push(LogoCandidate::new(Some(url), "twitter:image", 2));
        }
    }

    for (rel, href) in doc.links() {
        let is_apple_touch = rel
            .split_whitespace()
            .any(|word| word.starts_with("apple-touch-icon"));
        if is_apple_touch {
            if let Some(url) = doc.resolve(href) {
                candidates.push(LogoCandidate::new(Some(url), "apple-touch-icon", 3));
            }
        }
    }

    for element in doc.html().select(&IMG_SELECTOR) {
        let tag = element.value();
        let mentions_logo = ["src", "alt", "class", "id"]
            .iter()
            .any(|attr| attr_contains_logo(tag.attr(attr)));
        if mentions_logo {
            if let Some(url) = tag.attr("src").and_then(|src| doc.resolve(src)) {
                candidates.push(LogoCandidate::new(Some(url), "img-logo", 4));
            }
        }
    }

    for element in doc.html().select(&SVG_SELECTOR) {
        if attr_contains_logo(element.value().attr("class")) {
            candidates.push(LogoCandidate::new(None, "inline-svg", 5));
            break;
        }
    }

    if let Some((_, href)) = doc.links().find(|(rel, _)| {
        let words: Vec<&str> = rel.split_whitespace().collect();
        words.contains(&"icon") && !words.iter().any(|w| w.starts_with("apple-touch-icon"))
    }) {
        if let Some(url) = doc.resolve(href) {
            candidates.push(LogoCandidate::new(Some(url), "icon-link", 6));
        }
    }

    if let Some(url) = fallback_favicon_url(doc.base()) {
        candidates.push(LogoCandidate::new(Some(url), "favicon", 7));
    }

    // Stable sort keeps document order within a priority tier
    candidates.sort_by_key(|candidate| candidate.priority);
    candidates.into_iter().find(|c| c.url.is_some())
}

fn attr_contains_logo(value: Option<&str>) -> bool {
    value
        .map(|v| v.to_lowercase().contains("logo"))
        .unwrap_or(false)
}

/// Builds the fallback `/favicon.ico` URL from the page origin.
fn fallback_favicon_url(base: &Url) -> Option<String> {
    let host = base.host_str()?;
    Some(match base.port() {
        Some(port) => format!("{}://{}:{}/favicon.ico", base.scheme(), host, port),
        None => format!("{}://{}/favicon.ico", base.scheme(), host),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::MarkupDocument;

    fn doc(html: &str) -> MarkupDocument {
        MarkupDocument::parse(html, Url::parse("https://example.com/about").unwrap())
    }

    #[test]
    fn test_og_image_wins_over_everything() {
        let doc = doc(
            r#"<head>
                <meta property="og:image" content="/img/share.png">
                <meta name="twitter:image" content="/img/tw.png">
                <link rel="apple-touch-icon" href="/touch.png">
                <link rel="icon" href="/favicon.png">
            </head>
            <body><img src="/logo.svg" alt="company logo"></body>"#,
        );
        let logo = extract_logo(&doc).unwrap();
        assert_eq!(logo.priority, 1);
        assert_eq!(logo.source, "og:image");
        assert_eq!(logo.url.as_deref(), Some("https://example.com/img/share.png"));
    }

    #[test]
    fn test_no_signals_falls_back_to_origin_favicon() {
        let doc = doc("<html><body><p>nothing here</p></body></html>");
        let logo = extract_logo(&doc).unwrap();
        assert_eq!(logo.priority, 7);
        assert_eq!(logo.source, "favicon");
        assert_eq!(logo.url.as_deref(), Some("https://example.com/favicon.ico"));
    }

    #[test]
    fn test_img_logo_attribute_scan_is_case_insensitive() {
        let doc = doc(r#"<body><img src="/assets/brand.png" class="site-LOGO"></body>"#);
        let logo = extract_logo(&doc).unwrap();
        assert_eq!(logo.priority, 4);
        assert_eq!(logo.url.as_deref(), Some("https://example.com/assets/brand.png"));
    }

    #[test]
    fn test_inline_svg_is_skipped_for_fetchable_fallback() {
        // An inline SVG flags presence but has no URL; the chosen candidate
        // must be the fetchable favicon fallback
        let doc = doc(r#"<body><svg class="logo-mark"><path d="M0 0"/></svg></body>"#);
        let logo = extract_logo(&doc).unwrap();
        assert_eq!(logo.priority, 7);
    }

    #[test]
    fn test_icon_link_preferred_over_fallback() {
        let doc = doc(r#"<head><link rel="shortcut icon" href="/fav.png"></head>"#);
        let logo = extract_logo(&doc).unwrap();
        assert_eq!(logo.priority, 6);
        assert_eq!(logo.url.as_deref(), Some("https://example.com/fav.png"));
    }

    #[test]
    fn test_apple_touch_icon_beats_img_scan() {
        let doc = doc(
            r#"<head><link rel="apple-touch-icon" href="/touch-180.png"></head>
            <body><img src="/logo.png" id="logo"></body>"#,
        );
        let logo = extract_logo(&doc).unwrap();
        assert_eq!(logo.priority, 3);
        assert_eq!(logo.source, "apple-touch-icon");
    }

    #[test]
    fn test_twitter_image_second() {
        let doc = doc(r#"<meta name="twitter:image" content="https://cdn.example.com/card.png">"#);
        let logo = extract_logo(&doc).unwrap();
        assert_eq!(logo.priority, 2);
        assert_eq!(logo.url.as_deref(), Some("https://cdn.example.com/card.png"));
    }

    #[test]
    fn test_fallback_favicon_url_with_port() {
        let base = Url::parse("https://example.com:8443/page").unwrap();
        assert_eq!(
            fallback_favicon_url(&base),
            Some("https://example.com:8443/favicon.ico".to_string())
        );
    }
}
