//! CSS color value parsing and normalization.
//!
//! Accepts 3/6/8-digit hex, `rgb()`/`rgba()`, and `hsl()`/`hsla()` forms and
//! normalizes them all to an RGB triple (alpha dropped). Near-black and
//! near-white values are structural chrome, not brand colors, and are gated
//! out by the caller via [`is_near_neutral`].

use regex::Regex;
use std::sync::LazyLock;

use crate::config::{NEAR_BLACK_BRIGHTNESS, NEAR_WHITE_BRIGHTNESS};

// Longest hex alternative first: alternation is leftmost-preferential
const HEX_PATTERN: &str = r"#([0-9a-fA-F]{8}|[0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b";
const RGB_PATTERN: &str = r"rgba?\(\s*(\d{1,3})[,\s]+(\d{1,3})[,\s]+(\d{1,3})";
const HSL_PATTERN: &str =
    r"hsla?\(\s*(\d{1,3}(?:\.\d+)?)[,\s]+(\d{1,3}(?:\.\d+)?)%[,\s]+(\d{1,3}(?:\.\d+)?)%";

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(HEX_PATTERN).expect("HEX_PATTERN is a compile-time constant and must parse")
});
static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(RGB_PATTERN).expect("RGB_PATTERN is a compile-time constant and must parse")
});
static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(HSL_PATTERN).expect("HSL_PATTERN is a compile-time constant and must parse")
});

/// Finds the first color token in a CSS value and normalizes it to RGB.
///
/// Returns `None` when the value carries no recognizable color (keywords,
/// gradients without literal stops, `var()` indirection, ...).
pub(crate) fn parse_color(value: &str) -> Option<(u8, u8, u8)> {
    if let Some(captures) = HEX_RE.captures(value) {
        return hex_to_rgb(&captures[1]);
    }
    if let Some(captures) = RGB_RE.captures(value) {
        let r: u16 = captures[1].parse().ok()?;
        let g: u16 = captures[2].parse().ok()?;
        let b: u16 = captures[3].parse().ok()?;
        if r > 255 || g > 255 || b > 255 {
            return None;
        }
        return Some((r as u8, g as u8, b as u8));
    }
    if let Some(captures) = HSL_RE.captures(value) {
        let h: f64 = captures[1].parse().ok()?;
        let s: f64 = captures[2].parse().ok()?;
        let l: f64 = captures[3].parse().ok()?;
        return Some(hsl_to_rgb(h, s / 100.0, l / 100.0));
    }
    None
}

/// Expands a 3/6/8-digit hex payload (no leading `#`) to an RGB triple.
///
/// 3-digit shorthand duplicates each digit; 8-digit drops the trailing alpha
/// pair.
fn hex_to_rgb(digits: &str) -> Option<(u8, u8, u8)> {
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        8 => digits[..6].to_string(),
        _ => return None,
    };
    let r = u8::from_str_radix(&expanded[0..2], 16).ok()?;
    let g = u8::from_str_radix(&expanded[2..4], 16).ok()?;
    let b = u8::from_str_radix(&expanded[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Standard HSL to RGB conversion. Hue in degrees, saturation and lightness
/// in [0,1].
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = h.rem_euclid(360.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    )
}

/// Formats an RGB triple as a 6-digit uppercase hex string with leading `#`.
pub(crate) fn to_hex(rgb: (u8, u8, u8)) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.0, rgb.1, rgb.2)
}

/// True when the mean channel brightness marks the color as near-white or
/// near-black structural chrome.
pub(crate) fn is_near_neutral(rgb: (u8, u8, u8)) -> bool {
    let mean = (rgb.0 as f64 + rgb.1 as f64 + rgb.2 as f64) / 3.0;
    mean > NEAR_WHITE_BRIGHTNESS || mean < NEAR_BLACK_BRIGHTNESS
}

/// Relative luminance in [0,1] (ITU-R BT.709 coefficients).
pub(crate) fn relative_luminance(rgb: (u8, u8, u8)) -> f64 {
    (0.2126 * rgb.0 as f64 + 0.7152 * rgb.1 as f64 + 0.0722 * rgb.2 as f64) / 255.0
}
