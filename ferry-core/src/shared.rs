//! Shared data manager for boards that poll and render from separate tasks
//!
//! The data manager itself is single-threaded. When the network task and the
//! render task run separately, every update and every group of reads that
//! must agree with each other go through one blocking mutex, so a render
//! never sees records from one line paired with the receipt time of another.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::config::DataConfig;
use crate::data::{DataManager, FerryData, UpdateReport};

/// Data manager guarded by a blocking mutex
///
/// Use `CriticalSectionRawMutex` when tasks run at different interrupt
/// priorities, `ThreadModeRawMutex` or `NoopRawMutex` on a single executor.
pub struct SharedDataManager<M: RawMutex> {
    inner: Mutex<M, RefCell<DataManager>>,
}

impl<M: RawMutex> SharedDataManager<M> {
    /// Create a shared, empty data manager
    pub fn new(config: DataConfig) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(DataManager::new(config))),
        }
    }

    /// Ingest a raw status line (see [`DataManager::update`])
    pub fn update(&self, raw: &str, now_ms: u64) -> UpdateReport {
        self.inner.lock(|data| data.borrow_mut().update(raw, now_ms))
    }

    /// Check if a refresh is due (see [`DataManager::should_update`])
    pub fn should_update(&self, now_ms: u64) -> bool {
        self.inner.lock(|data| data.borrow().should_update(now_ms))
    }

    /// Interpolated position of one ferry (see [`DataManager::get_progress`])
    pub fn get_progress(&self, index: usize, now_ms: u64) -> FerryData {
        self.inner
            .lock(|data| data.borrow().get_progress(index, now_ms))
    }

    /// Run `f` against one consistent view of the data manager
    ///
    /// Use this when rendering several ferries in one tick.
    pub fn snapshot<R>(&self, f: impl FnOnce(&DataManager) -> R) -> R {
        self.inner.lock(|data| f(&data.borrow()))
    }
}

#[cfg(test)]
mod tests {
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    use super::*;
    use crate::data::UpdateOutcome;
    use crate::Direction;

    #[test]
    fn test_update_and_read_through_mutex() {
        let shared = SharedDataManager::<NoopRawMutex>::new(DataConfig::default());
        assert!(shared.should_update(0));

        let report = shared.update("0.0,1.0,0,DEPARTING:0.5,1.0,1000,ARRIVING:10000", 0);
        assert_eq!(report.outcome, UpdateOutcome::Applied { records: 2 });
        assert!(!shared.should_update(100));

        let ferry = shared.get_progress(1, 0);
        assert_eq!(ferry.direction, Direction::Arriving);
        let diff = ferry.progress - 0.55;
        assert!(diff < 1e-9 && diff > -1e-9);
    }

    #[test]
    fn test_snapshot_is_consistent() {
        let shared = SharedDataManager::<NoopRawMutex>::new(DataConfig::default());
        shared.update("0.2,0.2,0,DEPARTING:0.8,0.8,0,ARRIVING:10000", 0);

        let (count, hands) = shared.snapshot(|data| {
            (
                data.len(),
                [data.get_progress(0, 10).progress, data.get_progress(1, 10).progress],
            )
        });
        assert_eq!(count, 2);
        assert_eq!(hands, [0.2, 0.8]);
    }
}
