//! Brand color extraction.
//!
//! A frequency-weighted fold over color observations from every CSS source:
//! brand-named custom properties weigh +3, plain color-bearing property
//! declarations weigh +1. Observations are deduplicated by normalized hex
//! with accumulated weight, sorted, truncated, and labeled.

mod value;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::config::{MAX_COLOR_ENTRIES, PRIMARY_WEIGHT_THRESHOLD, SECONDARY_WEIGHT_THRESHOLD};
use value::{is_near_neutral, parse_color, relative_luminance, to_hex};

const CUSTOM_PROP_PATTERN: &str = r"--([A-Za-z0-9_-]+)\s*:\s*([^;}]+)";
// The leading boundary keeps `color` from matching inside `background-color`
// or a custom property name
const COLOR_DECL_PATTERN: &str =
    r"(?:^|[;{\s])(background-color|background|color|border-color|fill|stroke)\s*:\s*([^;}]+)";

/// Custom-property name fragments considered brand-relevant.
const BRAND_PROPERTY_VOCABULARY: &[&str] = &[
    "color",
    "bg",
    "background",
    "primary",
    "secondary",
    "accent",
    "brand",
    "text",
    "foreground",
    "surface",
    "muted",
];

/// Weight granted to a brand-named custom property occurrence.
const CUSTOM_PROPERTY_WEIGHT: u32 = 3;
/// Weight granted to a plain color-bearing declaration occurrence.
const DECLARATION_WEIGHT: u32 = 1;

static CUSTOM_PROP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(CUSTOM_PROP_PATTERN)
        .expect("CUSTOM_PROP_PATTERN is a compile-time constant and must parse")
});
static COLOR_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(COLOR_DECL_PATTERN)
        .expect("COLOR_DECL_PATTERN is a compile-time constant and must parse")
});

/// Palette role assigned to an extracted color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorRole {
    /// Dominant brand color
    Primary,
    /// Supporting brand color
    Secondary,
    /// Occasional highlight color
    Accent,
}

impl ColorRole {
    /// Returns a human-readable string representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorRole::Primary => "Primary",
            ColorRole::Secondary => "Secondary",
            ColorRole::Accent => "Accent",
        }
    }
}

impl std::fmt::Display for ColorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A deduplicated, weighted color extracted from the page's CSS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSample {
    /// Normalized 6-digit uppercase hex with leading `#`
    pub hex: String,
    /// RGB triple derived from the hex
    pub rgb: (u8, u8, u8),
    /// Relative luminance in [0,1]
    pub luminance: f64,
    /// Accumulated occurrence weight across all sources
    pub frequency: u32,
    /// Assigned palette role
    pub label: ColorRole,
}

/// Extracts up to `MAX_COLOR_ENTRIES` brand colors from the given CSS texts.
///
/// Near-white and near-black values are excluded outright. Results are
/// ordered by descending accumulated weight (first-seen order breaks ties)
/// and labeled in two passes: a weight-threshold pass, then a forced
/// relabeling of the top three ranks to Primary/Secondary/Accent. With fewer
/// than three colors the remaining first-pass labels stand, even when that
/// ranks an Accent above a forced Secondary.
pub fn extract_colors(css_sources: &[String]) -> Vec<ColorSample> {
    let mut weights: HashMap<String, u32> = HashMap::new();
    let mut rgb_by_hex: HashMap<String, (u8, u8, u8)> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for css in css_sources {
        for captures in CUSTOM_PROP_RE.captures_iter(css) {
            let name = captures[1].to_lowercase();
            let is_brand_named = BRAND_PROPERTY_VOCABULARY
                .iter()
                .any(|fragment| name.contains(fragment));
            if !is_brand_named {
                continue;
            }
            record_observation(
                &captures[2],
                CUSTOM_PROPERTY_WEIGHT,
                &mut weights,
                &mut rgb_by_hex,
                &mut first_seen,
            );
        }

        for captures in COLOR_DECL_RE.captures_iter(css) {
            record_observation(
                &captures[2],
                DECLARATION_WEIGHT,
                &mut weights,
                &mut rgb_by_hex,
                &mut first_seen,
            );
        }
    }

    let mut ranked: Vec<(String, u32, usize)> = first_seen
        .iter()
        .enumerate()
        .map(|(index, hex)| (hex.clone(), weights[hex], index))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(MAX_COLOR_ENTRIES);

    let mut samples: Vec<ColorSample> = ranked
        .into_iter()
        .map(|(hex, frequency, _)| {
            let rgb = rgb_by_hex[&hex];
            ColorSample {
                rgb,
                luminance: relative_luminance(rgb),
                frequency,
                label: threshold_label(frequency),
                hex,
            }
        })
        .collect();

    // Second pass: the top three ranks are forced regardless of weight
    for (sample, role) in samples
        .iter_mut()
        .zip([ColorRole::Primary, ColorRole::Secondary, ColorRole::Accent])
    {
        sample.label = role;
    }

    samples
}

fn record_observation(
    raw_value: &str,
    weight: u32,
    weights: &mut HashMap<String, u32>,
    rgb_by_hex: &mut HashMap<String, (u8, u8, u8)>,
    first_seen: &mut Vec<String>,
) {
    let Some(rgb) = parse_color(raw_value) else {
        return;
    };
    if is_near_neutral(rgb) {
        return;
    }
    let hex = to_hex(rgb);
    if !weights.contains_key(&hex) {
        first_seen.push(hex.clone());
        rgb_by_hex.insert(hex.clone(), rgb);
    }
    *weights.entry(hex).or_insert(0) += weight;
}

fn threshold_label(weight: u32) -> ColorRole {
    if weight > PRIMARY_WEIGHT_THRESHOLD {
        ColorRole::Primary
    } else if weight > SECONDARY_WEIGHT_THRESHOLD {
        ColorRole::Secondary
    } else {
        ColorRole::Accent
    }
}
