//! Ferry status ingestion and progress interpolation
//!
//! The data manager turns raw status lines into per-ferry progress records
//! and answers "where is ferry `i` right now" at any instant between network
//! refreshes by extrapolating linearly from the last anchor.

pub mod manager;
pub mod progress;
pub mod report;

pub use manager::DataManager;
pub use progress::{FerryData, FerryMode, Progress};
pub use report::{Diagnostic, UpdateOutcome, UpdateReport, MAX_DIAGNOSTICS};
