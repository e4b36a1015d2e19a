//! Indicator output trait
//!
//! Abstracts the physical indicator (servo clock hands, stepper slides, dock
//! lights). Ferry data is handed over through an explicit supplier function
//! rather than shared callback slots.

use crate::data::FerryData;

/// Calibration state of an output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputState {
    /// Calibration has not started
    #[default]
    Uncalibrated,
    /// Calibration sequence in progress
    Calibrating,
    /// Ready to display ferry positions
    Running,
}

/// Trait for ferry position outputs
pub trait OutputManager {
    /// Advance the calibration sequence
    ///
    /// Called every render tick until it returns [`OutputState::Running`].
    fn calibrate(&mut self, now_ms: u64) -> OutputState;

    /// Render the current ferry positions
    ///
    /// `supplier` answers for any ferry slot the output drives; unknown slots
    /// yield [`FerryData::default`].
    fn update<F>(&mut self, supplier: F, now_ms: u64)
    where
        F: Fn(usize) -> FerryData;
}
