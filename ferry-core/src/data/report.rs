//! Update outcomes and diagnostics
//!
//! None of these are faults: they are returned for inspection and logged,
//! and the caller's loop carries on regardless.

use heapless::Vec;

use ferry_protocol::{RecordError, StatusError};

use crate::config::MAX_FERRIES;

/// Maximum diagnostics per update: the segment count, one unknown direction
/// per stored record, and the entry that ends the parse
pub const MAX_DIAGNOSTICS: usize = MAX_FERRIES + 2;

/// What an update did to the stored records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UpdateOutcome {
    /// Records replaced by every segment in the line
    Applied { records: usize },
    /// Server flagged its data stale; records untouched, retry backed off
    Stale,
    /// Horizon unusable; records untouched, retry backed off
    Rejected,
    /// Parse stopped at a bad segment; `records` parsed before it were kept
    Aborted { records: usize },
}

/// A reportable condition seen while ingesting a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Diagnostic {
    /// Composite segment count differs from the configured ferry count
    SegmentCount { expected: usize, found: usize },
    /// Horizon field could not be used
    InvalidHorizon(StatusError),
    /// Segment `index` failed to decode
    MalformedRecord { index: usize, error: RecordError },
    /// Segment `index` had an unknown direction literal; defaulted to departing
    UnknownDirection { index: usize },
    /// Segment `index` did not fit in the record store
    CapacityExceeded { index: usize },
}

/// Result of one `update` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    /// Effect on the stored records
    pub outcome: UpdateOutcome,
    /// Conditions reported along the way, in order
    pub diagnostics: Vec<Diagnostic, MAX_DIAGNOSTICS>,
}

impl UpdateReport {
    pub(crate) fn new(outcome: UpdateOutcome) -> Self {
        Self {
            outcome,
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        // Bounded by MAX_DIAGNOSTICS: record diagnostics stop once the store is full
        let _ = self.diagnostics.push(diagnostic);
    }

    /// Check if the line was ingested without any diagnostic
    pub fn is_clean(&self) -> bool {
        matches!(self.outcome, UpdateOutcome::Applied { .. }) && self.diagnostics.is_empty()
    }
}
