//! Main control loop coordinating polling and rendering
//!
//! The controller is a cooperative, single-threaded loop body:
//! - Polls the status source when the data manager says a refresh is due
//! - Feeds fetched lines to the data manager
//! - Calibrates the output, then renders interpolated positions every tick
//!
//! Polling and rendering run at independent cadences; rendering never waits
//! on the network.

use crate::config::FerryConfig;
use crate::data::{DataManager, UpdateOutcome};
use crate::traits::{Clock, OutputManager, OutputState, StatusSource};

/// Result of one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollOutcome {
    /// Refresh interval has not elapsed
    NotDue,
    /// A line was fetched and ingested
    Updated(UpdateOutcome),
    /// Transport failed; state untouched, retried next poll
    FetchFailed,
}

/// Controller state for one ferry clock
pub struct Controller<S, O, C> {
    /// Status ingestion and interpolation
    data: DataManager,
    /// Network transport
    source: S,
    /// Indicator hardware
    output: O,
    /// Monotonic time source
    clock: C,
    /// Output calibration state as last reported
    output_state: OutputState,
    /// Consecutive transport failures
    fetch_failures: u32,
}

impl<S, O, C> Controller<S, O, C>
where
    S: StatusSource,
    O: OutputManager,
    C: Clock,
{
    /// Create a controller from a validated configuration
    pub fn new(config: &FerryConfig, source: S, output: O, clock: C) -> Self {
        Self {
            data: DataManager::new(config.data),
            source,
            output,
            clock,
            output_state: OutputState::Uncalibrated,
            fetch_failures: 0,
        }
    }

    /// Fetch and ingest a status line if a refresh is due
    pub fn poll(&mut self) -> PollOutcome {
        if !self.data.should_update(self.clock.now_ms()) {
            return PollOutcome::NotDue;
        }

        let line = match self.source.fetch() {
            Ok(line) => line,
            Err(_) => {
                self.fetch_failures = self.fetch_failures.saturating_add(1);
                warn!("Status fetch failed ({} in a row)", self.fetch_failures);
                return PollOutcome::FetchFailed;
            }
        };
        self.fetch_failures = 0;

        // Receipt time is taken after the fetch returns
        let report = self.data.update(&line, self.clock.now_ms());
        PollOutcome::Updated(report.outcome)
    }

    /// Drive the output for one render tick
    pub fn render(&mut self) -> OutputState {
        let now_ms = self.clock.now_ms();

        if self.output_state != OutputState::Running {
            let state = self.output.calibrate(now_ms);
            if state == OutputState::Running {
                info!("Output calibration finished");
            }
            self.output_state = state;
            return state;
        }

        let data = &self.data;
        self.output
            .update(|index| data.get_progress(index, now_ms), now_ms);
        self.output_state
    }

    /// One cooperative loop iteration: poll, then render
    pub fn step(&mut self) -> (PollOutcome, OutputState) {
        let poll = self.poll();
        let output = self.render();
        (poll, output)
    }

    /// Data manager
    pub fn data(&self) -> &DataManager {
        &self.data
    }

    /// Output collaborator
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Status source collaborator
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Output calibration state as last reported
    pub fn output_state(&self) -> OutputState {
        self.output_state
    }

    /// Consecutive transport failures since the last successful fetch
    pub fn fetch_failures(&self) -> u32 {
        self.fetch_failures
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use heapless::{String, Vec};

    use super::*;
    use crate::data::FerryData;
    use crate::Direction;
    use ferry_protocol::MAX_STATUS_LEN;

    struct ScriptedSource {
        lines: Vec<Option<&'static str>, 8>,
        fetches: usize,
    }

    impl ScriptedSource {
        fn new(lines: &[Option<&'static str>]) -> Self {
            Self {
                lines: Vec::from_slice(lines).unwrap(),
                fetches: 0,
            }
        }
    }

    impl StatusSource for ScriptedSource {
        type Error = ();

        fn fetch(&mut self) -> Result<String<MAX_STATUS_LEN>, ()> {
            let line = self.lines.get(self.fetches).copied().flatten();
            self.fetches += 1;
            match line {
                Some(line) => String::try_from(line).map_err(|_| ()),
                None => Err(()),
            }
        }
    }

    /// Two-hand clock that needs `calibration_ticks` calibrate calls
    #[derive(Default)]
    struct RecordingOutput {
        calibration_ticks: u8,
        calibrate_calls: u8,
        rendered: Vec<FerryData, 4>,
        renders: u32,
    }

    impl OutputManager for RecordingOutput {
        fn calibrate(&mut self, _now_ms: u64) -> OutputState {
            self.calibrate_calls += 1;
            if self.calibrate_calls > self.calibration_ticks {
                OutputState::Running
            } else {
                OutputState::Calibrating
            }
        }

        fn update<F>(&mut self, supplier: F, _now_ms: u64)
        where
            F: Fn(usize) -> FerryData,
        {
            self.rendered.clear();
            for hand in 0..2 {
                let _ = self.rendered.push(supplier(hand));
            }
            self.renders += 1;
        }
    }

    fn controller<'a>(
        lines: &[Option<&'static str>],
        calibration_ticks: u8,
        time: &'a Cell<u64>,
    ) -> Controller<ScriptedSource, RecordingOutput, impl Fn() -> u64 + 'a> {
        let output = RecordingOutput {
            calibration_ticks,
            ..Default::default()
        };
        Controller::new(
            &FerryConfig::default(),
            ScriptedSource::new(lines),
            output,
            move || time.get(),
        )
    }

    const LINE: &str = "0.0,1.0,0,DEPARTING:0.25,1.0,10000,ARRIVING:100000";

    #[test]
    fn test_poll_respects_refresh_rate() {
        let time = Cell::new(0);
        let mut ctrl = controller(&[Some(LINE), Some(LINE)], 0, &time);

        assert_eq!(
            ctrl.poll(),
            PollOutcome::Updated(UpdateOutcome::Applied { records: 2 })
        );
        time.set(4999);
        assert_eq!(ctrl.poll(), PollOutcome::NotDue);
        time.set(5000);
        assert!(matches!(ctrl.poll(), PollOutcome::Updated(_)));
        assert_eq!(ctrl.source().fetches, 2);
    }

    #[test]
    fn test_fetch_failure_leaves_state() {
        let time = Cell::new(0);
        let mut ctrl = controller(&[Some(LINE), None], 0, &time);

        ctrl.poll();
        time.set(6000);
        assert_eq!(ctrl.poll(), PollOutcome::FetchFailed);
        assert_eq!(ctrl.fetch_failures(), 1);
        assert_eq!(ctrl.data().len(), 2);
        assert_eq!(ctrl.data().last_updated_ms(), Some(0));
        // Still due, so the next poll retries straight away
        assert!(ctrl.data().should_update(6000));
    }

    #[test]
    fn test_stale_poll_backs_off() {
        let time = Cell::new(1000);
        let mut ctrl = controller(&[Some("0,0,0,DEPARTING:1,1,0,ARRIVING:-1")], 0, &time);

        assert_eq!(ctrl.poll(), PollOutcome::Updated(UpdateOutcome::Stale));
        assert!(ctrl.data().is_empty());
        time.set(1000 + 4000 + 4999);
        assert_eq!(ctrl.poll(), PollOutcome::NotDue);
    }

    #[test]
    fn test_render_waits_for_calibration() {
        let time = Cell::new(0);
        let mut ctrl = controller(&[Some(LINE)], 2, &time);

        assert_eq!(ctrl.step().1, OutputState::Calibrating);
        assert_eq!(ctrl.step().1, OutputState::Calibrating);
        assert_eq!(ctrl.step().1, OutputState::Running);
        assert_eq!(ctrl.output().renders, 0);

        assert_eq!(ctrl.render(), OutputState::Running);
        assert_eq!(ctrl.output().renders, 1);
        assert_eq!(ctrl.output().calibrate_calls, 3);
    }

    #[test]
    fn test_render_interpolates_at_render_time() {
        let time = Cell::new(50_000);
        let mut ctrl = controller(&[Some(LINE)], 0, &time);

        ctrl.poll();
        ctrl.render();

        time.set(60_000);
        ctrl.render();
        let rendered = &ctrl.output().rendered;
        assert_eq!(rendered[0].progress, 0.0);
        assert_eq!(rendered[1].direction, Direction::Arriving);
        let diff = rendered[1].progress - 0.4;
        assert!(diff < 1e-9 && diff > -1e-9);
    }
}
