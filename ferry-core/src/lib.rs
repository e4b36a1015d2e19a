//! Board-agnostic core logic for the ferry clock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware or network implementations:
//!
//! - Data manager: status ingestion, staleness back-off, progress interpolation
//! - Collaborator traits (clock, status source, output)
//! - Control loop tying polling and rendering together
//! - Mutex-guarded shared data manager for multi-task boards
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod config;
pub mod controller;
pub mod data;
pub mod shared;
pub mod traits;

pub use ferry_protocol::Direction;
