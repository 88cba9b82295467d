// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Flat, signed time spans.
//!
//! [`Duration`] stores a single [`Milliseconds`] quantity. Unit accessors are
//! fixed ratios: one day is always 86 400 000 ms, never a DST-aware calendar
//! day. Calendar effects live in [`crate::tz`].
//!
//! Arithmetic stays in `f64` until the span is applied to an instant, at which
//! point it is rounded to the nearest microsecond.

use chrono::{DateTime, TimeDelta, TimeZone};
use qtty::*;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{Error, Result};

/// An immutable signed time span at millisecond resolution.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Duration {
    quantity: Milliseconds,
}

impl Duration {
    /// The empty span.
    pub const ZERO: Self = Self::from_milliseconds(0.0);

    // ── constructors ──────────────────────────────────────────────────

    #[inline]
    pub const fn from_milliseconds(ms: f64) -> Self {
        Self {
            quantity: Milliseconds::new(ms),
        }
    }

    #[inline]
    pub fn from_seconds(seconds: f64) -> Self {
        Self::from_quantity(Seconds::new(seconds).to::<Millisecond>())
    }

    #[inline]
    pub fn from_minutes(minutes: f64) -> Self {
        Self::from_quantity(Minutes::new(minutes).to::<Millisecond>())
    }

    #[inline]
    pub fn from_hours(hours: f64) -> Self {
        Self::from_quantity(Hours::new(hours).to::<Millisecond>())
    }

    #[inline]
    pub fn from_days(days: f64) -> Self {
        Self::from_quantity(Days::new(days).to::<Millisecond>())
    }

    #[inline]
    pub const fn from_quantity(quantity: Milliseconds) -> Self {
        Self { quantity }
    }

    /// Signed span `b − a`.
    pub fn from_difference<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> Self {
        Self::from(b.clone().signed_duration_since(a.clone()))
    }

    /// `instant + duration`, with the span rounded to whole microseconds.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] when the span or the result falls outside
    /// chrono's representable range.
    pub fn add<Tz: TimeZone>(instant: &DateTime<Tz>, duration: Duration) -> Result<DateTime<Tz>> {
        let delta = TimeDelta::try_from(duration)?;
        instant.clone().checked_add_signed(delta).ok_or_else(|| {
            Error::OutOfRange(format!(
                "{} + {duration} is not representable",
                instant.naive_utc()
            ))
        })
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn quantity(&self) -> Milliseconds {
        self.quantity
    }

    #[inline]
    pub const fn milliseconds(&self) -> f64 {
        self.quantity.value()
    }

    #[inline]
    pub fn seconds(&self) -> f64 {
        self.quantity.to::<Second>().value()
    }

    #[inline]
    pub fn minutes(&self) -> f64 {
        self.quantity.to::<Minute>().value()
    }

    #[inline]
    pub fn hours(&self) -> f64 {
        self.quantity.to::<Hour>().value()
    }

    #[inline]
    pub fn days(&self) -> f64 {
        self.quantity.to::<Day>().value()
    }

    /// Whether the span is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.milliseconds() > 0.0
    }

    /// The span as a chrono delta, rounded to whole microseconds.
    ///
    /// `None` for non-finite spans and spans beyond `i64` microseconds.
    pub fn to_time_delta(&self) -> Option<TimeDelta> {
        let micros = (self.milliseconds() * 1_000.0).round();
        (micros.is_finite() && micros.abs() < i64::MAX as f64)
            .then(|| TimeDelta::microseconds(micros as i64))
    }
}

// ── conversions ───────────────────────────────────────────────────────────

impl From<TimeDelta> for Duration {
    fn from(delta: TimeDelta) -> Self {
        // Whole milliseconds plus the sub-millisecond remainder keeps
        // microsecond precision for spans of several centuries.
        let whole_ms = delta.num_milliseconds();
        let rest = delta - TimeDelta::milliseconds(whole_ms);
        let rest_us = rest.num_microseconds().unwrap_or(0);
        Self::from_milliseconds(whole_ms as f64 + rest_us as f64 / 1_000.0)
    }
}

impl TryFrom<Duration> for TimeDelta {
    type Error = Error;

    fn try_from(duration: Duration) -> Result<Self> {
        duration
            .to_time_delta()
            .ok_or_else(|| Error::OutOfRange(format!("span of {duration} exceeds chrono's range")))
    }
}

impl From<Hours> for Duration {
    fn from(hours: Hours) -> Self {
        Self::from_quantity(hours.to::<Millisecond>())
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.quantity)
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add for Duration {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_quantity(self.quantity + rhs.quantity)
    }
}

impl Sub for Duration {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_quantity(self.quantity - rhs.quantity)
    }
}

impl Neg for Duration {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_milliseconds(-self.milliseconds())
    }
}

impl Mul<f64> for Duration {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::from_milliseconds(self.milliseconds() * rhs)
    }
}

impl Div<f64> for Duration {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self::from_milliseconds(self.milliseconds() / rhs)
    }
}
