//! Public API behavior: URL normalization, cache discipline, and the JSON
//! wire shape of the analysis record.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use brand_probe::{
    AnalysisResult, ColorRole, ColorSample, FontCategory, FontEntry, LogoCandidate, NormalizedUrl,
    ResultCache,
};

fn sample_result() -> AnalysisResult {
    AnalysisResult {
        url: "https://acme.example/".to_string(),
        site_name: "Acme".to_string(),
        title: "Acme Widgets".to_string(),
        description: "Widgets for builders.".to_string(),
        tagline: Some("Build Better, Faster".to_string()),
        logo: Some(LogoCandidate {
            url: Some("https://acme.example/img/og-card.png".to_string()),
            source: "og:image".to_string(),
            priority: 1,
        }),
        fonts: vec![FontEntry {
            name: "Roboto".to_string(),
            category: FontCategory::SansSerif,
            sample: "The quick brown fox jumps over the lazy dog".to_string(),
        }],
        colors: vec![ColorSample {
            hex: "#E8590C".to_string(),
            rgb: (232, 89, 12),
            luminance: 0.45,
            frequency: 4,
            label: ColorRole::Primary,
        }],
        analyzed_at: Utc::now(),
        cached: false,
    }
}

#[test]
fn normalization_prepends_scheme_and_is_idempotent() {
    let first = NormalizedUrl::parse("acme.example/pricing").unwrap();
    assert!(first.as_str().starts_with("https://"));

    let second = NormalizedUrl::parse(first.as_str()).unwrap();
    assert_eq!(first.as_str(), second.as_str());
}

#[test]
fn normalization_rejects_unparseable_input() {
    assert!(NormalizedUrl::parse("not a url at all!!!").is_err());
}

#[test]
fn cache_window_returns_identical_content() {
    let cache = Arc::new(ResultCache::new());
    let original = sample_result();
    cache.insert(original.url.clone(), original.clone());

    let hit = cache.get(&original.url).expect("within TTL window");
    // Byte-identical content, timestamp included
    assert_eq!(
        serde_json::to_string(&hit).unwrap(),
        serde_json::to_string(&original).unwrap()
    );
}

#[test]
fn cache_expires_after_ttl() {
    let cache = ResultCache::with_ttl(Duration::from_millis(10));
    let result = sample_result();
    cache.insert(result.url.clone(), result.clone());
    std::thread::sleep(Duration::from_millis(25));
    assert!(cache.get(&result.url).is_none());
}

#[test]
fn result_serializes_with_display_names() {
    let json = serde_json::to_string(&sample_result()).unwrap();
    assert!(json.contains("\"Sans-Serif\""));
    assert!(json.contains("\"Primary\""));
    assert!(json.contains("\"#E8590C\""));
    assert!(json.contains("\"og:image\""));
    assert!(json.contains("\"cached\":false"));
}

#[test]
fn result_round_trips_through_json() {
    let original = sample_result();
    let json = serde_json::to_string(&original).unwrap();
    let restored: AnalysisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}
