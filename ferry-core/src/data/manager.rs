//! Data manager
//!
//! Owns the refresh policy and the current set of progress records. All
//! operations take the current monotonic time in milliseconds; the manager
//! itself never reads a clock or touches the network.
//!
//! Ferry identity is positional: record `i` of the most recent update is
//! "ferry `i`" to every caller.

use core::num::NonZeroI64;

use heapless::Vec;

use ferry_protocol::{Direction, Horizon, StatusLine};

use crate::config::{DataConfig, MAX_FERRIES};

use super::progress::{FerryData, FerryMode, Progress};
use super::report::{Diagnostic, UpdateOutcome, UpdateReport};

/// Status ingestion and progress interpolation state
#[derive(Debug, Clone)]
pub struct DataManager {
    /// Records from the most recent non-stale update, by ferry slot
    progresses: Vec<Progress, MAX_FERRIES>,
    /// Receipt time of the last update, pushed forward on stale responses.
    /// `None` until the first update.
    last_updated_ms: Option<u64>,
    /// Horizon shared by all records; set whenever records are stored
    end_duration_ahead_ms: Option<NonZeroI64>,
    /// Ingestion settings
    config: DataConfig,
}

impl Default for DataManager {
    fn default() -> Self {
        Self::new(DataConfig::default())
    }
}

impl DataManager {
    /// Create an empty data manager
    pub fn new(config: DataConfig) -> Self {
        Self {
            progresses: Vec::new(),
            last_updated_ms: None,
            end_duration_ahead_ms: None,
            config,
        }
    }

    /// Ingest a raw status line received at `now_ms`
    ///
    /// On a stale or unusable horizon the stored records are left alone and
    /// the next refresh is pushed back. Otherwise the records are cleared and
    /// rebuilt in line order. A segment that fails to decode stops the parse
    /// and the records decoded before it stay in place.
    pub fn update(&mut self, raw: &str, now_ms: u64) -> UpdateReport {
        let line = StatusLine::split(raw);

        let horizon = match line.horizon() {
            Ok(Horizon::Ahead(ms)) => ms,
            Ok(Horizon::Stale) => {
                debug!("Server data is stale, backing off");
                self.back_off(now_ms);
                return UpdateReport::new(UpdateOutcome::Stale);
            }
            Err(e) => {
                warn!("Unusable horizon in status line: {}", e);
                self.back_off(now_ms);
                let mut report = UpdateReport::new(UpdateOutcome::Rejected);
                report.push(Diagnostic::InvalidHorizon(e));
                return report;
            }
        };

        self.last_updated_ms = Some(now_ms);
        self.end_duration_ahead_ms = Some(horizon);
        self.progresses.clear();

        let mut report = UpdateReport::new(UpdateOutcome::Applied { records: 0 });

        let expected = self.config.expected_ferries as usize;
        let found = line.segment_count();
        if found != expected {
            warn!("Suspect size of {} when splitting status line", found);
            report.push(Diagnostic::SegmentCount { expected, found });
        }

        for (index, record) in line.records().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(error) => {
                    warn!("Invalid record {} in status line: {}", index, error);
                    report.push(Diagnostic::MalformedRecord { index, error });
                    report.outcome = UpdateOutcome::Aborted {
                        records: self.progresses.len(),
                    };
                    return report;
                }
            };

            if self.progresses.is_full() {
                warn!("No room for record {}, keeping {}", index, MAX_FERRIES);
                report.push(Diagnostic::CapacityExceeded { index });
                report.outcome = UpdateOutcome::Aborted {
                    records: self.progresses.len(),
                };
                return report;
            }

            let direction = match record.direction {
                Some(direction) => direction,
                None => {
                    warn!("Unknown direction string in record {}", index);
                    report.push(Diagnostic::UnknownDirection { index });
                    Direction::Departing
                }
            };

            // Capacity checked above
            let _ = self.progresses.push(Progress::from_record(&record, direction));
        }

        report.outcome = UpdateOutcome::Applied {
            records: self.progresses.len(),
        };
        report
    }

    /// Check if enough time has passed to fetch a new status line
    pub fn should_update(&self, now_ms: u64) -> bool {
        match self.last_updated_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.config.refresh_rate_ms,
        }
    }

    /// Interpolated position of ferry `index` at `now_ms`
    ///
    /// Unknown slots are reported and answered with [`FerryData::default`]
    /// (departing, progress 0.0).
    pub fn get_progress(&self, index: usize, now_ms: u64) -> FerryData {
        match self.try_progress(index, now_ms) {
            Some(data) => data,
            None => {
                warn!("Attempt to get progress of nonexistent ferry index {}", index);
                FerryData::default()
            }
        }
    }

    /// Interpolated position of ferry `index`, or `None` for unknown slots
    pub fn try_progress(&self, index: usize, now_ms: u64) -> Option<FerryData> {
        let progress = self.progresses.get(index)?;
        Some(FerryData {
            direction: progress.direction,
            progress: self.interpolate(progress, now_ms),
        })
    }

    /// Indicator mode of ferry `index`
    pub fn mode(&self, index: usize) -> FerryMode {
        match self.progresses.get(index) {
            None => FerryMode::Disconnected,
            Some(progress) if progress.is_docked() => FerryMode::Docked,
            Some(_) => FerryMode::Running,
        }
    }

    /// Stored records, by ferry slot
    pub fn progresses(&self) -> &[Progress] {
        &self.progresses
    }

    /// Number of tracked ferries
    pub fn len(&self) -> usize {
        self.progresses.len()
    }

    /// Check if no ferries are tracked
    pub fn is_empty(&self) -> bool {
        self.progresses.is_empty()
    }

    /// Receipt time of the last update, including any stale back-off
    pub fn last_updated_ms(&self) -> Option<u64> {
        self.last_updated_ms
    }

    /// Horizon of the stored records
    pub fn end_duration_ahead_ms(&self) -> Option<i64> {
        self.end_duration_ahead_ms.map(NonZeroI64::get)
    }

    /// Ingestion settings
    pub fn config(&self) -> &DataConfig {
        &self.config
    }

    fn back_off(&mut self, now_ms: u64) {
        self.last_updated_ms = Some(now_ms.saturating_add(self.config.stale_backoff_ms()));
    }

    /// Linear extrapolation from the record's anchor at the server's rate
    fn interpolate(&self, progress: &Progress, now_ms: u64) -> f64 {
        if progress.is_docked() {
            return progress.start;
        }
        let (Some(horizon), Some(last_updated)) =
            (self.end_duration_ahead_ms, self.last_updated_ms)
        else {
            return progress.start;
        };

        let rate_per_ms = (progress.end - progress.start) / horizon.get() as f64;
        // Instant at which `start` was true
        let reference_ms = last_updated as f64 - progress.start_time_offset_ms as f64;
        (now_ms as f64 - reference_ms) * rate_per_ms + progress.start
    }
}
