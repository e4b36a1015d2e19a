//! Status line decoding.
//!
//! A status line is split from the right: the last `:`-separated segment is
//! the horizon, everything before it is the composite body. Each composite
//! segment carries exactly [`FIELDS_PER_RECORD`] `,`-separated fields.
//!
//! Decoding is lazy and allocation-free; records borrow nothing from the line
//! once parsed.

use core::num::NonZeroI64;

use crate::direction::Direction;

/// Separator between composite records and before the horizon
pub const SEGMENT_SEPARATOR: char = ':';

/// Separator between fields of one composite record
pub const FIELD_SEPARATOR: char = ',';

/// Fields in a composite record: start, end, offset, direction
pub const FIELDS_PER_RECORD: usize = 4;

/// Horizon value the server sends when its data is stale
pub const STALE_HORIZON: i64 = -1;

/// Decoded horizon field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Horizon {
    /// Server has no fresh data; keep what we have
    Stale,
    /// Milliseconds ahead at which the record `end` positions are reached
    Ahead(NonZeroI64),
}

impl Horizon {
    /// Build a horizon from its wire value, rejecting zero
    pub fn from_ms(ms: i64) -> Result<Self, StatusError> {
        if ms == STALE_HORIZON {
            return Ok(Horizon::Stale);
        }
        NonZeroI64::new(ms)
            .map(Horizon::Ahead)
            .ok_or(StatusError::ZeroHorizon)
    }

    /// Wire value of this horizon
    pub fn as_ms(self) -> i64 {
        match self {
            Horizon::Stale => STALE_HORIZON,
            Horizon::Ahead(ms) => ms.get(),
        }
    }
}

/// Errors decoding the horizon field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusError {
    /// Horizon is not a signed decimal integer
    InvalidHorizon,
    /// Horizon is zero, which would divide the interpolation rate by zero
    ZeroHorizon,
}

/// Field position within a composite record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Start,
    End,
    Offset,
}

/// Errors decoding one composite record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RecordError {
    /// Segment did not split into exactly four fields
    FieldCount { found: usize },
    /// A numeric field did not parse
    InvalidField(Field),
}

/// One composite record as it appears on the wire
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusRecord {
    /// Position fraction at the anchor instant
    pub start: f64,
    /// Position fraction reached after the horizon
    pub end: f64,
    /// Milliseconds before receipt at which `start` was true (0 = docked)
    pub start_offset_ms: u64,
    /// Travel direction, `None` when the literal was not recognised
    pub direction: Option<Direction>,
}

/// A raw status line split into composite body and horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine<'a> {
    body: Option<&'a str>,
    horizon: &'a str,
}

impl<'a> StatusLine<'a> {
    /// Split a raw line at its last segment separator
    pub fn split(raw: &'a str) -> Self {
        match raw.rsplit_once(SEGMENT_SEPARATOR) {
            Some((body, horizon)) => Self {
                body: Some(body),
                horizon,
            },
            None => Self {
                body: None,
                horizon: raw,
            },
        }
    }

    /// Decode the trailing horizon field
    pub fn horizon(&self) -> Result<Horizon, StatusError> {
        let ms = self
            .horizon
            .trim()
            .parse::<i64>()
            .map_err(|_| StatusError::InvalidHorizon)?;
        Horizon::from_ms(ms)
    }

    /// Raw composite segments, in order
    pub fn segments(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.body
            .into_iter()
            .flat_map(|body| body.split(SEGMENT_SEPARATOR))
    }

    /// Number of composite segments before the horizon
    pub fn segment_count(&self) -> usize {
        self.segments().count()
    }

    /// Decode composite segments lazily, in order
    pub fn records(&self) -> impl Iterator<Item = Result<StatusRecord, RecordError>> + 'a {
        self.segments().map(parse_record)
    }
}

/// Decode a single composite segment
///
/// Numeric fields are whitespace-trimmed; the direction literal must match
/// exactly.
pub fn parse_record(segment: &str) -> Result<StatusRecord, RecordError> {
    let mut fields = [""; FIELDS_PER_RECORD];
    let mut found = 0;
    for field in segment.split(FIELD_SEPARATOR) {
        if found < FIELDS_PER_RECORD {
            fields[found] = field;
        }
        found += 1;
    }
    if found != FIELDS_PER_RECORD {
        return Err(RecordError::FieldCount { found });
    }

    let start = parse_fraction(fields[0], Field::Start)?;
    let end = parse_fraction(fields[1], Field::End)?;
    let start_offset_ms = fields[2]
        .trim()
        .parse::<u64>()
        .map_err(|_| RecordError::InvalidField(Field::Offset))?;

    Ok(StatusRecord {
        start,
        end,
        start_offset_ms,
        direction: Direction::from_wire(fields[3]),
    })
}

/// Parse a position fraction, rejecting NaN and infinities
fn parse_fraction(field: &str, which: Field) -> Result<f64, RecordError> {
    match field.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RecordError::InvalidField(which)),
    }
}
