//! brand_probe library: brand-identity signal extraction for web pages
//!
//! This library fetches a single public web page (plus its linked
//! stylesheets) and heuristically extracts brand-identity signals: logo URL,
//! tagline, color palette, font list, and descriptive metadata. Heuristics
//! degrade gracefully - missing markup yields absent values, and stylesheet
//! fetch failures never fail a request.
//!
//! # Example
//!
//! ```no_run
//! use brand_probe::{BrandAnalyzer, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = BrandAnalyzer::new(&Config::default())?;
//! let result = analyzer.analyze("stripe.com").await?;
//! println!("{} uses {} color(s) and {} font(s)",
//!          result.site_name, result.colors.len(), result.fonts.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod cache;
pub mod config;
mod error_handling;
pub mod extract;
mod fetch;
pub mod initialization;
pub mod markup;
mod models;
mod normalize;
mod pipeline;
mod utils;

// Re-export public API
pub use cache::ResultCache;
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{AnalysisError, InitializationError, ProcessingStats, WarningType};
pub use extract::{
    ColorRole, ColorSample, FontCategory, FontEntry, LogoCandidate, SiteMetadata,
};
pub use models::AnalysisResult;
pub use normalize::NormalizedUrl;
pub use pipeline::BrandAnalyzer;
