// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for prayer-time computation.
//!
//! Every failure is a deterministic function of the input, so nothing here is
//! retryable. [`Error::kind`] groups the variants into the three categories a
//! caller reports back to its own clients.

use chrono::NaiveDate;
use thiserror::Error;

use crate::method::TimingName;

/// Result type for prayer-time operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid or unsupported input that makes the computation meaningless.
    Configuration,
    /// Malformed date range or mismatched batch lengths.
    Range,
    /// The sun never reaches the requested position on that date.
    Unreachable,
}

/// Errors that can occur while configuring the engine or solving timings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Latitude beyond ±60°, where hour-angle solving diverges.
    #[error("high/polar latitudes are unsupported: {0}° is outside [-60, 60]")]
    UnsupportedLatitude(f64),

    /// Longitude outside [-180, 180].
    #[error("longitude {0}° is outside [-180, 180]")]
    InvalidLongitude(f64),

    /// Timezone identifier not present in the IANA database.
    #[error("unknown IANA timezone identifier: {0:?}")]
    UnknownTimeZone(String),

    /// Madhab selector outside 1 (Shafi) ..= 2 (Hanafi).
    #[error("invalid madhab {0}: expected 1 (Shafi) or 2 (Hanafi)")]
    InvalidMadhab(String),

    /// Calculation method id not found in the registry.
    #[error("unknown calculation method: {0:?}")]
    UnknownMethod(String),

    /// Timing name outside the closed set.
    #[error("unknown timing name: {0:?}")]
    UnknownTiming(String),

    /// Range whose end does not come after its start.
    #[error("range end must come after its start")]
    EmptyRange,

    /// Step larger than the whole range.
    #[error("step of {step_ms} ms exceeds the range span of {span_ms} ms")]
    StepTooLarge { step_ms: f64, span_ms: f64 },

    /// Zero or negative step.
    #[error("step must be positive, got {0} ms")]
    NonPositiveStep(f64),

    /// Parallel `names`/`dates` inputs of different lengths.
    #[error("names ({names}) and dates ({dates}) must have the same length")]
    LengthMismatch { names: usize, dates: usize },

    /// A local time or date could not be represented.
    #[error("date/time out of representable range: {0}")]
    OutOfRange(String),

    /// The sun never reaches the angle needed for `timing` on `date`.
    #[error("{timing} cannot be computed on {date}: the sun never reaches the required position")]
    Unreachable { timing: TimingName, date: NaiveDate },
}

impl Error {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedLatitude(_)
            | Error::InvalidLongitude(_)
            | Error::UnknownTimeZone(_)
            | Error::InvalidMadhab(_)
            | Error::UnknownMethod(_)
            | Error::UnknownTiming(_) => ErrorKind::Configuration,
            Error::EmptyRange
            | Error::StepTooLarge { .. }
            | Error::NonPositiveStep(_)
            | Error::LengthMismatch { .. }
            | Error::OutOfRange(_) => ErrorKind::Range,
            Error::Unreachable { .. } => ErrorKind::Unreachable,
        }
    }
}
