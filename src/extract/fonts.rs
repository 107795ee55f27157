//! Font family extraction and classification.
//!
//! Candidate family names are collected from Google Fonts link hrefs, inline
//! `@import` statements, `@font-face` rules, generic `font-family`
//! declarations, and font-named CSS custom properties - merged in discovery
//! order, deduplicated by exact name, and capped. Each retained name is then
//! classified as Monospace, Serif, or Sans-Serif.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::config::{
    FONT_NAME_MAX_LENGTH, FONT_NAME_MIN_LENGTH, FONT_SAMPLE_TEXT, MAX_FONT_ENTRIES,
};

// Regex patterns over CSS text
const GOOGLE_IMPORT_PATTERN: &str =
    r#"@import\s+(?:url\()?['"]?([^'")\s;]*fonts\.googleapis\.com[^'")\s;]*)"#;
const FONT_FACE_PATTERN: &str = r"@font-face\s*\{([^}]*)\}";
const FONT_FAMILY_PATTERN: &str = r"font-family\s*:\s*([^;}]+)";
const FONT_CUSTOM_PROP_PATTERN: &str = r"--([A-Za-z0-9_-]*font[A-Za-z0-9_-]*)\s*:\s*([^;}]+)";

/// CSS-wide keywords that name a rendering category, not a family.
const GENERIC_FONT_KEYWORDS: &[&str] = &[
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "inherit",
    "initial",
    "unset",
];

/// Name fragments marking monospace families.
const MONOSPACE_MARKERS: &[&str] = &[
    "mono",
    "code",
    "console",
    "courier",
    "fira",
    "jetbrains",
    "hack",
    "source code",
];

/// Well-known serif families that don't carry "serif" in their name.
const KNOWN_SERIF_FAMILIES: &[&str] = &[
    "georgia",
    "times",
    "garamond",
    "baskerville",
    "palatino",
    "playfair",
    "merriweather",
    "lora",
    "cormorant",
    "bodoni",
    "caslon",
];

/// Helper to compile a static regex pattern, panicking with a detailed message
/// if compilation fails (a programming error for compile-time constants).
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static GOOGLE_IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(GOOGLE_IMPORT_PATTERN, "GOOGLE_IMPORT_RE"));
static FONT_FACE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(FONT_FACE_PATTERN, "FONT_FACE_RE"));
static FONT_FAMILY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(FONT_FAMILY_PATTERN, "FONT_FAMILY_RE"));
static FONT_CUSTOM_PROP_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(FONT_CUSTOM_PROP_PATTERN, "FONT_CUSTOM_PROP_RE"));

/// Rendering category of a font family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontCategory {
    /// Bracketed serifs (Georgia, Playfair Display, ...)
    Serif,
    /// Unbracketed faces; the default category
    #[serde(rename = "Sans-Serif")]
    SansSerif,
    /// Fixed-pitch faces (Fira Code, JetBrains Mono, ...)
    Monospace,
}

impl FontCategory {
    /// Returns a human-readable string representation of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            FontCategory::Serif => "Serif",
            FontCategory::SansSerif => "Sans-Serif",
            FontCategory::Monospace => "Monospace",
        }
    }
}

impl std::fmt::Display for FontCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A deduplicated font discovered on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontEntry {
    /// Family name exactly as discovered
    pub name: String,
    /// Classified rendering category
    pub category: FontCategory,
    /// Fixed display string for previews
    pub sample: String,
}

impl FontEntry {
    fn new(name: String) -> Self {
        let category = classify_font(&name);
        FontEntry {
            name,
            category,
            sample: FONT_SAMPLE_TEXT.to_string(),
        }
    }
}

/// Extracts up to `MAX_FONT_ENTRIES` distinct font families.
///
/// `google_font_links` are the raw hrefs of Google Fonts `<link>` tags;
/// `css_sources` are CSS texts in source order (inline `<style>` blocks
/// first, then fetched external stylesheets). Names are deduplicated
/// case-sensitively and kept in discovery order.
pub fn extract_fonts(google_font_links: &[String], css_sources: &[String]) -> Vec<FontEntry> {
    let mut names: Vec<String> = Vec::new();

    for href in google_font_links {
        for family in parse_google_families(href) {
            push_unique(&mut names, family);
        }
    }

    for css in css_sources {
        for captures in GOOGLE_IMPORT_RE.captures_iter(css) {
            for family in parse_google_families(&captures[1]) {
                push_unique(&mut names, family);
            }
        }

        for captures in FONT_FACE_RE.captures_iter(css) {
            if let Some(family_match) = FONT_FAMILY_RE.captures(&captures[1]) {
                if let Some(name) = clean_font_name(&family_match[1]) {
                    push_unique(&mut names, name);
                }
            }
        }

        for captures in FONT_FAMILY_RE.captures_iter(css) {
            if let Some(name) = clean_font_name(&captures[1]) {
                push_unique(&mut names, name);
            }
        }

        for captures in FONT_CUSTOM_PROP_RE.captures_iter(css) {
            if let Some(name) = clean_font_name(&captures[2]) {
                push_unique(&mut names, name);
            }
        }
    }

    names.truncate(MAX_FONT_ENTRIES);
    names.into_iter().map(FontEntry::new).collect()
}

fn push_unique(names: &mut Vec<String>, name: String) {
    if !names.iter().any(|existing| existing == &name) {
        names.push(name);
    }
}

/// Parses family names out of a Google Fonts URL's query string.
///
/// Each `family=` value may carry multiple families separated by `|`; a `:`
/// suffix lists weights and is stripped; `+` encodes a space.
fn parse_google_families(href: &str) -> Vec<String> {
    let Some((_, query)) = href.split_once('?') else {
        return Vec::new();
    };

    let mut families = Vec::new();
    for pair in query.split('&') {
        let Some(value) = pair.strip_prefix("family=") else {
            continue;
        };
        for entry in value.split('|') {
            let name = entry
                .split(':')
                .next()
                .unwrap_or_default()
                .replace('+', " ")
                .replace("%20", " ")
                .trim()
                .to_string();
            if !name.is_empty() {
                families.push(name);
            }
        }
    }
    families
}

/// Normalizes a raw CSS font value into a candidate family name.
///
/// Takes the first family of a stack, strips quotes, and rejects generic
/// keywords, `var()` references, and names outside the accepted length
/// window.
fn clean_font_name(raw: &str) -> Option<String> {
    let first = raw.split(',').next().unwrap_or_default();
    let name = first.trim().trim_matches(['"', '\'']).trim().to_string();

    if name.is_empty() || name.contains('(') {
        return None;
    }
    let len = name.chars().count();
    if !(FONT_NAME_MIN_LENGTH..=FONT_NAME_MAX_LENGTH).contains(&len) {
        return None;
    }
    let lower = name.to_lowercase();
    if GENERIC_FONT_KEYWORDS.contains(&lower.as_str()) {
        return None;
    }
    Some(name)
}

/// Classifies a family name into its rendering category.
fn classify_font(name: &str) -> FontCategory {
    let lower = name.to_lowercase();
    if MONOSPACE_MARKERS.iter().any(|m| lower.contains(m)) {
        FontCategory::Monospace
    } else if has_serif_marker(&lower) || KNOWN_SERIF_FAMILIES.iter().any(|m| lower.contains(m)) {
        FontCategory::Serif
    } else {
        FontCategory::SansSerif
    }
}

/// True when the name contains "serif" not immediately followed by "less".
fn has_serif_marker(lower: &str) -> bool {
    let mut from = 0;
    while let Some(pos) = lower[from..].find("serif") {
        let after = from + pos + "serif".len();
        if !lower[after..].starts_with("less") {
            return true;
        }
        from = from + pos + 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[FontEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_google_link_families_with_weights_and_pipe() {
        let links = vec![
            "https://fonts.googleapis.com/css?family=Roboto:400,700|Open+Sans".to_string(),
        ];
        let fonts = extract_fonts(&links, &[]);
        assert_eq!(names(&fonts), vec!["Roboto", "Open Sans"]);
        assert!(fonts
            .iter()
            .all(|f| f.category == FontCategory::SansSerif));
    }

    #[test]
    fn test_google_css2_multiple_family_params() {
        let links = vec![
            "https://fonts.googleapis.com/css2?family=Playfair+Display:wght@700&family=Inter"
                .to_string(),
        ];
        let fonts = extract_fonts(&links, &[]);
        assert_eq!(names(&fonts), vec!["Playfair Display", "Inter"]);
        assert_eq!(fonts[0].category, FontCategory::Serif);
    }

    #[test]
    fn test_inline_import_statement() {
        let css = "@import url('https://fonts.googleapis.com/css?family=Lato');".to_string();
        let fonts = extract_fonts(&[], &[css]);
        assert_eq!(names(&fonts), vec!["Lato"]);
    }

    #[test]
    fn test_font_face_family() {
        let css = r#"@font-face { font-family: "Brand Grotesk"; src: url(/f.woff2); }"#.to_string();
        let fonts = extract_fonts(&[], &[css]);
        assert_eq!(names(&fonts), vec!["Brand Grotesk"]);
    }

    #[test]
    fn test_declaration_takes_first_family_and_skips_generics() {
        let css = "body { font-family: 'Open Sans', Arial, sans-serif; } code { font-family: monospace; }"
            .to_string();
        let fonts = extract_fonts(&[], &[css]);
        assert_eq!(names(&fonts), vec!["Open Sans"]);
    }

    #[test]
    fn test_custom_property_with_font_in_name() {
        let css = "--font-heading: 'Lora', serif; --spacing: 4px;".to_string();
        let fonts = extract_fonts(&[], &[css]);
        assert_eq!(names(&fonts), vec!["Lora"]);
        assert_eq!(fonts[0].category, FontCategory::Serif);
    }

    #[test]
    fn test_var_references_rejected() {
        let css = "h1 { font-family: var(--font-heading); }".to_string();
        let fonts = extract_fonts(&[], &[css]);
        assert!(fonts.is_empty());
    }

    #[test]
    fn test_dedup_and_cap() {
        let links =
            vec!["https://fonts.googleapis.com/css?family=Roboto|Open+Sans".to_string()];
        let css = "body { font-family: Roboto; } \
                   .a { font-family: AlphaFace; } .b { font-family: BetaFace; } \
                   .c { font-family: GammaFace; } .d { font-family: DeltaFace; } \
                   .e { font-family: EpsilonFace; }"
            .to_string();
        let fonts = extract_fonts(&links, &[css]);
        assert_eq!(fonts.len(), MAX_FONT_ENTRIES);
        // Google link families first, then CSS discoveries minus the duplicate
        assert_eq!(
            names(&fonts),
            vec![
                "Roboto",
                "Open Sans",
                "AlphaFace",
                "BetaFace",
                "GammaFace",
                "DeltaFace"
            ]
        );
    }

    #[test]
    fn test_classification_markers() {
        assert_eq!(classify_font("Fira Code"), FontCategory::Monospace);
        assert_eq!(classify_font("JetBrains Mono"), FontCategory::Monospace);
        assert_eq!(classify_font("Source Code Pro"), FontCategory::Monospace);
        assert_eq!(classify_font("PT Serif"), FontCategory::Serif);
        assert_eq!(classify_font("Merriweather"), FontCategory::Serif);
        assert_eq!(classify_font("Inter"), FontCategory::SansSerif);
        assert_eq!(classify_font("Helvetica Neue"), FontCategory::SansSerif);
    }

    #[test]
    fn test_serif_marker_not_followed_by_less() {
        assert!(has_serif_marker("pt serif"));
        assert!(!has_serif_marker("serifless display"));
        assert!(has_serif_marker("seriflessserif"));
    }

    #[test]
    fn test_length_window() {
        let css = format!(
            "a {{ font-family: X; }} b {{ font-family: {}; }}",
            "L".repeat(60)
        );
        let fonts = extract_fonts(&[], &[css]);
        assert!(fonts.is_empty());
    }

    #[test]
    fn test_sample_text_attached() {
        let css = "p { font-family: Inter; }".to_string();
        let fonts = extract_fonts(&[], &[css]);
        assert_eq!(fonts[0].sample, FONT_SAMPLE_TEXT);
    }
}
