//! # Capture Tracker
//!
//! The set of creature names the user has marked as captured.
//!
//! - Held in memory only; starts empty and lives as long as its owner
//! - Capture and release are idempotent
//! - Names are not checked against the dataset; unknown names are accepted
//!
//! The tracker itself is not synchronized. Callers that share it between
//! threads wrap it in a lock (the HTTP server keeps it behind an `RwLock`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Status string reported by every successful tracker mutation.
pub const STATUS_SUCCESS: &str = "success";

// =============================================================================
// CAPTURE STATUS
// =============================================================================

/// Result of a capture or release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureStatus {
    pub status: String,
    pub captured: bool,
}

impl CaptureStatus {
    #[must_use]
    pub fn captured() -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            captured: true,
        }
    }

    #[must_use]
    pub fn released() -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            captured: false,
        }
    }
}

// =============================================================================
// CAPTURE SET
// =============================================================================

/// Set of captured names.
///
/// Uses BTreeSet so `list` is sorted and repeatable.
#[derive(Debug, Clone, Default)]
pub struct CaptureSet {
    names: BTreeSet<String>,
}

impl CaptureSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `name` as captured. No-op if it already is.
    pub fn capture(&mut self, name: impl Into<String>) -> CaptureStatus {
        self.names.insert(name.into());
        CaptureStatus::captured()
    }

    /// Unmark `name`. No-op if it was never captured.
    pub fn release(&mut self, name: &str) -> CaptureStatus {
        self.names.remove(name);
        CaptureStatus::released()
    }

    /// All captured names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }

    #[must_use]
    pub fn is_captured(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CaptureSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
