//! Text normalization helpers.

/// Collapses runs of whitespace (including newlines from nested markup) into
/// single spaces and trims the ends.
///
/// Extracted element text frequently spans multiple text nodes with layout
/// whitespace between them; heuristics compare lengths, so the collapsed form
/// is the canonical one.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
