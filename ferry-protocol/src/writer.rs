//! Status line encoding.
//!
//! Used by the server side (and by test fixtures on the clock side) to build
//! lines the decoder in [`crate::status`] accepts.

use core::fmt::Write;

use heapless::String;

use crate::direction::Direction;
use crate::status::{Horizon, FIELD_SEPARATOR, SEGMENT_SEPARATOR};

/// Maximum encoded status line length in bytes
pub const MAX_STATUS_LEN: usize = 256;

/// Errors that can occur while encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WriteError {
    /// Line does not fit in [`MAX_STATUS_LEN`] bytes
    Overflow,
}

impl From<core::fmt::Error> for WriteError {
    fn from(_: core::fmt::Error) -> Self {
        WriteError::Overflow
    }
}

/// Incremental status line builder
#[derive(Debug, Clone, Default)]
pub struct StatusWriter {
    line: String<MAX_STATUS_LEN>,
    records: usize,
}

impl StatusWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records written so far
    pub fn records(&self) -> usize {
        self.records
    }

    /// Append a moving (or docked, when `start_offset_ms == 0`) record
    pub fn record(
        &mut self,
        start: f64,
        end: f64,
        start_offset_ms: u64,
        direction: Direction,
    ) -> Result<&mut Self, WriteError> {
        write!(
            self.line,
            "{start}{sep}{end}{sep}{start_offset_ms}{sep}{dir}{seg}",
            sep = FIELD_SEPARATOR,
            dir = direction.as_wire(),
            seg = SEGMENT_SEPARATOR,
        )?;
        self.records += 1;
        Ok(self)
    }

    /// Append a docked record held at `progress`
    pub fn docked(&mut self, progress: f64, direction: Direction) -> Result<&mut Self, WriteError> {
        self.record(progress, progress, 0, direction)
    }

    /// Pad with docked placeholders until `min_records` records exist
    ///
    /// Placeholders alternate between the origin dock (departing, 0) and the
    /// far dock (arriving, 1) by slot parity.
    pub fn pad_docked(&mut self, min_records: usize) -> Result<&mut Self, WriteError> {
        while self.records < min_records {
            if self.records % 2 == 0 {
                self.docked(0.0, Direction::Departing)?;
            } else {
                self.docked(1.0, Direction::Arriving)?;
            }
        }
        Ok(self)
    }

    /// Terminate the line with its horizon
    pub fn finish(mut self, horizon: Horizon) -> Result<String<MAX_STATUS_LEN>, WriteError> {
        write!(self.line, "{}", horizon.as_ms())?;
        Ok(self.line)
    }

    /// Line sent while the server has no data yet: one ferry docked at each
    /// end, flagged stale so the clock keeps polling
    pub fn stale_placeholder() -> Result<String<MAX_STATUS_LEN>, WriteError> {
        let mut writer = Self::new();
        writer.pad_docked(2)?;
        writer.finish(Horizon::Stale)
    }
}
