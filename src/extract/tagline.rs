//! Tagline extraction.
//!
//! A strict ordered fallback chain: hero/tagline-style selectors first, then
//! short social descriptions, then the first h1, then the leading sentence of
//! the page description. The first satisfying rule wins; rules are never
//! merged or scored.

use scraper::Selector;
use std::sync::LazyLock;

use crate::config::{
    TAGLINE_DESCRIPTION_MAX_LENGTH, TAGLINE_H1_MAX_LENGTH, TAGLINE_MAX_LENGTH, TAGLINE_MIN_LENGTH,
};
use crate::markup::MarkupDocument;
use crate::utils::parse_selector_unsafe;

/// Ordered hero/tagline selector table, most specific first. Kept declarative
/// so the ordering stays auditable.
const TAGLINE_SELECTOR_STRS: &[&str] = &[
    r#"[class*="tagline"]"#,
    r#"[class*="slogan"]"#,
    r#"[class*="hero"] h1"#,
    r#"[class*="hero"] h2"#,
    r#"[class*="headline"]"#,
    "header h1",
    "header h2",
];

static TAGLINE_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    TAGLINE_SELECTOR_STRS
        .iter()
        .map(|s| parse_selector_unsafe(s, "TAGLINE_SELECTORS"))
        .collect()
});

static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("h1", "H1_SELECTOR"));

/// Extracts a tagline from hero markup, falling back through social
/// descriptions and headings.
///
/// Selector hits must be 4-200 characters; og:/twitter:description fallbacks
/// must be under 120; the h1 fallback under 150. Returns `None` when nothing
/// qualifies.
pub fn extract_tagline(doc: &MarkupDocument) -> Option<String> {
    for selector in TAGLINE_SELECTORS.iter() {
        if let Some(text) = doc.first_text(selector) {
            let len = text.chars().count();
            if (TAGLINE_MIN_LENGTH..=TAGLINE_MAX_LENGTH).contains(&len) {
                return Some(text);
            }
        }
    }

    let fallbacks: [&dyn Fn() -> Option<String>; 4] = [
        &|| {
            doc.meta_property("og:description")
                .filter(|d| d.chars().count() < TAGLINE_DESCRIPTION_MAX_LENGTH)
        },
        &|| {
            doc.meta_name("twitter:description")
                .filter(|d| d.chars().count() < TAGLINE_DESCRIPTION_MAX_LENGTH)
        },
        &|| {
            doc.first_text(&H1_SELECTOR)
                .filter(|t| t.chars().count() < TAGLINE_H1_MAX_LENGTH)
        },
        &|| {
            let description = doc.meta_name("description")?;
            let leading = description.split('.').next().unwrap_or("").trim().to_string();
            (!leading.is_empty()).then_some(leading)
        },
    ];

    fallbacks.iter().find_map(|rule| rule())
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn doc(html: &str) -> MarkupDocument {
        MarkupDocument::parse(html, Url::parse("https://example.com/").unwrap())
    }

    #[test]
    fn test_hero_h1_wins() {
        let doc = doc(r#"<div class="hero"><h1>Build Better</h1></div>"#);
        assert_eq!(extract_tagline(&doc), Some("Build Better".to_string()));
    }

    #[test]
    fn test_tagline_class_beats_hero() {
        let doc = doc(
            r#"<p class="site-tagline">Widgets for everyone</p>
               <div class="hero"><h1>Welcome</h1></div>"#,
        );
        assert_eq!(
            extract_tagline(&doc),
            Some("Widgets for everyone".to_string())
        );
    }

    #[test]
    fn test_too_short_selector_hit_falls_through() {
        // "Hi" fails the 4-char gate; the short og:description applies instead
        let doc = doc(
            r#"<head><meta property="og:description" content="We build tiny widgets."></head>
               <body><div class="hero"><h1>Hi</h1></div></body>"#,
        );
        assert_eq!(
            extract_tagline(&doc),
            Some("We build tiny widgets.".to_string())
        );
    }

    #[test]
    fn test_long_og_description_rejected() {
        let long = "x".repeat(130);
        let html = format!(
            r#"<head><meta property="og:description" content="{long}"></head>
               <body><h1>Widgets, simplified</h1></body>"#
        );
        let doc = doc(&html);
        assert_eq!(
            extract_tagline(&doc),
            Some("Widgets, simplified".to_string())
        );
    }

    #[test]
    fn test_description_leading_sentence_is_last_resort() {
        let long_h1 = "y".repeat(160);
        let html = format!(
            r#"<head><meta name="description" content="Widgets that last. Since 1984."></head>
               <body><h1>{long_h1}</h1></body>"#
        );
        let doc = doc(&html);
        assert_eq!(extract_tagline(&doc), Some("Widgets that last".to_string()));
    }

    #[test]
    fn test_no_signals_yields_none() {
        let doc = doc("<html><body><p>plain page</p></body></html>");
        assert_eq!(extract_tagline(&doc), None);
    }

    #[test]
    fn test_header_h1_scope() {
        let doc = doc("<header><h1>Ship faster today</h1></header>");
        assert_eq!(extract_tagline(&doc), Some("Ship faster today".to_string()));
    }

    #[test]
    fn test_selector_text_is_whitespace_collapsed() {
        let doc = doc("<div class=\"hero\"><h1>\n  Build\n  Better\n</h1></div>");
        assert_eq!(extract_tagline(&doc), Some("Build Better".to_string()));
    }
}
