//! Error handling and processing statistics.
//!
//! This module provides:
//! - The pipeline error kinds the hosting layer maps to status codes
//! - Transport error categorization (one seam for all reqwest mapping)
//! - Warning statistics tracking for missing optional signals

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_fetch_error, categorize_http_status};
pub use stats::ProcessingStats;
pub use types::{AnalysisError, InitializationError, WarningType};
