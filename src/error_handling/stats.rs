//! Processing statistics tracking.
//!
//! Thread-safe counters for missing-signal warnings observed while analyzing
//! pages. Hard failures surface as [`super::AnalysisError`] values instead of
//! counters, so only warnings are tracked here.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::WarningType;

/// Thread-safe warning statistics tracker.
///
/// All warning types are initialized to zero on creation, so increments never
/// allocate. Share across tasks with `Arc`.
pub struct ProcessingStats {
    warnings: HashMap<WarningType, AtomicUsize>,
}

impl ProcessingStats {
    /// Creates a tracker with all warning counters at zero.
    pub fn new() -> Self {
        let mut warnings = HashMap::new();
        for warning in WarningType::iter() {
            warnings.insert(warning, AtomicUsize::new(0));
        }
        ProcessingStats { warnings }
    }

    /// Increment a warning counter.
    ///
    /// All warning types are initialized in the constructor; a missing entry
    /// indicates a bug, which is logged rather than panicking.
    pub fn increment_warning(&self, warning: WarningType) {
        if let Some(counter) = self.warnings.get(&warning) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment warning counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                warning
            );
        }
    }

    /// Get the count for a warning type.
    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings
            .get(&warning)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total warning count across all warning types.
    pub fn total_warnings(&self) -> usize {
        WarningType::iter().map(|w| self.get_warning_count(w)).sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
