//! Ferry Status Wire Format
//!
//! This crate defines the compact text line the ferry server answers with and
//! the clock polls for. The line is not self-describing: field meaning comes
//! from position alone.
//!
//! # Line Overview
//!
//! ```text
//! <start>,<end>,<offset>,<direction>:<start>,<end>,<offset>,<direction>: ... :<horizon>
//! └──────────── composite record ──┘                                        └ trailing ┘
//! ```
//!
//! - `start`, `end`: position fractions (0.0 = at origin dock, 1.0 = arrived)
//! - `offset`: milliseconds before receipt at which `start` was true; `0`
//!   means the ferry is docked
//! - `direction`: `DEPARTING` or `ARRIVING`
//! - `horizon`: milliseconds until `end` is expected to be reached, shared by
//!   every record in the line; `-1` means the server has no fresh data

#![no_std]
#![deny(unsafe_code)]

pub mod direction;
pub mod status;
pub mod writer;

pub use direction::Direction;
pub use status::{
    parse_record, Field, Horizon, RecordError, StatusError, StatusLine, StatusRecord,
    FIELDS_PER_RECORD, FIELD_SEPARATOR, SEGMENT_SEPARATOR, STALE_HORIZON,
};
pub use writer::{StatusWriter, WriteError, MAX_STATUS_LEN};
