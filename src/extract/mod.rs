//! Heuristic brand-signal extractors.
//!
//! Five independent extractors consume the parsed markup (and, for fonts and
//! colors, fetched CSS text) and each produce a typed partial result:
//! - Logo candidates, ranked by source trustworthiness
//! - Site metadata (title, description, site name)
//! - Tagline, via a strict ordered fallback chain
//! - Font families, deduplicated and classified
//! - Brand colors, frequency-weighted and labeled
//!
//! Every extractor tolerates missing markup and returns an empty or absent
//! value rather than raising.

mod colors;
mod fonts;
mod logo;
mod metadata;
mod tagline;

// Re-export public API
pub use colors::{extract_colors, ColorRole, ColorSample};
pub use fonts::{extract_fonts, FontCategory, FontEntry};
pub use logo::{extract_logo, LogoCandidate};
pub use metadata::{extract_metadata, SiteMetadata};
pub use tagline::extract_tagline;
