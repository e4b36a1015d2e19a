//! Configuration types
//!
//! Board-agnostic configuration structures. On boards with an allocator the
//! `toml` feature adds a loader for a `clock.toml` file.

#[cfg(feature = "toml")]
pub mod loader;
pub mod types;

#[cfg(feature = "toml")]
pub use loader::*;
pub use types::*;
