//! Site metadata extraction.
//!
//! Title, description, and site name, each from its own independent fallback
//! chain. Absence of one never blocks the others.

use serde::{Deserialize, Serialize};

use crate::error_handling::{ProcessingStats, WarningType};
use crate::markup::MarkupDocument;

/// Descriptive page metadata. Each field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    /// og:title, else `<title>` text
    pub title: String,
    /// meta description, else og:/twitter:description
    pub description: String,
    /// og:site_name, else the host with a leading "www." stripped
    pub site_name: String,
}

/// Extracts title, description, and site name from a parsed page.
///
/// Missing title and description are tracked as warnings; they are optional
/// signals and the assembler substitutes defaults where needed.
pub fn extract_metadata(doc: &MarkupDocument, stats: &ProcessingStats) -> SiteMetadata {
    let title = doc
        .meta_property("og:title")
        .or_else(|| doc.title_text())
        .unwrap_or_default();
    if title.is_empty() {
        stats.increment_warning(WarningType::MissingTitle);
    }

    let description = doc
        .meta_name("description")
        .or_else(|| doc.meta_property("og:description"))
        .or_else(|| doc.meta_name("twitter:description"))
        .unwrap_or_default();
    if description.is_empty() {
        stats.increment_warning(WarningType::MissingDescription);
    }

    let site_name = doc.meta_property("og:site_name").unwrap_or_else(|| {
        doc.host()
            .strip_prefix("www.")
            .unwrap_or(doc.host())
            .to_string()
    });

    SiteMetadata {
        title,
        description,
        site_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn doc(html: &str) -> MarkupDocument {
        MarkupDocument::parse(html, Url::parse("https://www.example.com/").unwrap())
    }

    #[test]
    fn test_og_title_preferred_over_title_element() {
        let doc = doc(
            r#"<head>
                <meta property="og:title" content="Acme - Widgets">
                <title>Acme home page</title>
            </head>"#,
        );
        let stats = ProcessingStats::new();
        let metadata = extract_metadata(&doc, &stats);
        assert_eq!(metadata.title, "Acme - Widgets");
        assert_eq!(stats.get_warning_count(WarningType::MissingTitle), 0);
    }

    #[test]
    fn test_title_element_fallback() {
        let doc = doc("<title>Acme home page</title>");
        let metadata = extract_metadata(&doc, &ProcessingStats::new());
        assert_eq!(metadata.title, "Acme home page");
    }

    #[test]
    fn test_missing_title_is_empty_and_warned() {
        let doc = doc("<html><body></body></html>");
        let stats = ProcessingStats::new();
        let metadata = extract_metadata(&doc, &stats);
        assert_eq!(metadata.title, "");
        assert_eq!(stats.get_warning_count(WarningType::MissingTitle), 1);
    }

    #[test]
    fn test_description_chain_prefers_meta_name() {
        let doc = doc(
            r#"<head>
                <meta name="description" content="Plain description.">
                <meta property="og:description" content="OG description.">
            </head>"#,
        );
        let metadata = extract_metadata(&doc, &ProcessingStats::new());
        assert_eq!(metadata.description, "Plain description.");
    }

    #[test]
    fn test_description_falls_through_to_twitter() {
        let doc = doc(r#"<meta name="twitter:description" content="Tweet-sized pitch.">"#);
        let metadata = extract_metadata(&doc, &ProcessingStats::new());
        assert_eq!(metadata.description, "Tweet-sized pitch.");
    }

    #[test]
    fn test_site_name_strips_www_from_host() {
        let doc = doc("<html></html>");
        let metadata = extract_metadata(&doc, &ProcessingStats::new());
        assert_eq!(metadata.site_name, "example.com");
    }

    #[test]
    fn test_site_name_prefers_og_site_name() {
        let doc = doc(r#"<meta property="og:site_name" content="Acme">"#);
        let metadata = extract_metadata(&doc, &ProcessingStats::new());
        assert_eq!(metadata.site_name, "Acme");
    }

    #[test]
    fn test_fields_are_independent() {
        let doc = doc(r#"<meta property="og:site_name" content="Acme">"#);
        let stats = ProcessingStats::new();
        let metadata = extract_metadata(&doc, &stats);
        assert_eq!(metadata.site_name, "Acme");
        assert_eq!(metadata.title, "");
        assert_eq!(metadata.description, "");
        assert_eq!(stats.total_warnings(), 2);
    }
}
