//! Collaborator traits
//!
//! These traits define the interface between the core logic and the
//! board-specific clock, network transport and indicator hardware.

pub mod clock;
pub mod output;
pub mod source;

pub use clock::Clock;
pub use output::{OutputManager, OutputState};
pub use source::StatusSource;
