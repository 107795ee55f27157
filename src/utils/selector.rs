//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses a CSS selector with a safe fallback.
///
/// If parsing fails, logs an error and returns a selector that matches nothing
/// (`*:not(*)`), so extraction degrades to an absent value instead of panicking.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error logging (e.g., "tagline extraction")
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' in {}: {}. Using fallback selector.",
            selector_str,
            context,
            e
        );
        Selector::parse("*:not(*)").expect(
            "Fallback selector '*:not(*)' should always parse - this is a programming error",
        )
    })
}

/// Parses a CSS selector that must succeed (for compile-time constants).
///
/// Panics if parsing fails, which is appropriate for static selectors that are
/// compile-time constants. Use `parse_selector_with_fallback()` for dynamic
/// selectors.
///
/// # Panics
///
/// Panics if the selector cannot be parsed (indicates a programming error).
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_unsafe_valid() {
        let selector = parse_selector_unsafe("meta[content]", "test");
        let html = scraper::Html::parse_document(r#"<meta name="a" content="b">"#);
        assert_eq!(html.select(&selector).count(), 1);
    }

    #[test]
    fn test_parse_selector_with_fallback_invalid_matches_nothing() {
        let selector = parse_selector_with_fallback("<<<not a selector>>>", "test");
        let html = scraper::Html::parse_document("<div><p>text</p></div>");
        assert_eq!(html.select(&selector).count(), 0);
    }
}
