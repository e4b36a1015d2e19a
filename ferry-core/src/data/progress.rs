//! Per-ferry progress types

use ferry_protocol::{Direction, StatusRecord};

/// Last observed motion interval of one ferry
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Progress {
    /// Position fraction at the anchor instant
    pub start: f64,
    /// Position fraction the ferry is moving toward
    pub end: f64,
    /// Milliseconds before the update's receipt at which `start` was true.
    /// Zero means the ferry is docked at `start`.
    pub start_time_offset_ms: u64,
    /// Travel direction
    pub direction: Direction,
}

impl Progress {
    /// Build from a decoded wire record with an already-resolved direction
    pub fn from_record(record: &StatusRecord, direction: Direction) -> Self {
        Self {
            start: record.start,
            end: record.end,
            start_time_offset_ms: record.start_offset_ms,
            direction,
        }
    }

    /// Check if the ferry is stationary (docked sentinel)
    pub fn is_docked(&self) -> bool {
        self.start_time_offset_ms == 0
    }
}

/// Answer to a progress query, consumed by output collaborators
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FerryData {
    /// Travel direction
    pub direction: Direction,
    /// Interpolated position fraction; not clamped to [0, 1]
    pub progress: f64,
}

impl Default for FerryData {
    /// Returned for unknown ferry slots: departing, at the origin dock
    fn default() -> Self {
        Self {
            direction: Direction::Departing,
            progress: 0.0,
        }
    }
}

/// Indicator mode of one ferry slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FerryMode {
    /// Underway, position interpolated
    Running,
    /// Stationary at a dock
    Docked,
    /// No data for this slot
    Disconnected,
}
