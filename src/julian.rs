// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date for civil calendar days.
//!
//! [`JulianDate`] stores a single [`Days`] quantity counting from the start of
//! the Julian Period. Dates built with [`JulianDate::from_calendar`] land on
//! `0h UT` of the given Gregorian day, so their fractional part is always `.5`.

use chrono::{Datelike, NaiveDate};
use qtty::*;
use std::fmt;
use std::ops::Sub;

/// A point on the Julian Day axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDate {
    quantity: Days,
}

impl JulianDate {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// Julian Day at `0h UT` of a Gregorian calendar date.
    ///
    /// January and February count as months 13 and 14 of the previous year;
    /// `B = 2 − A + ⌊A/4⌋` with `A = ⌊year/100⌋` is the Gregorian correction.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use salah::JulianDate;
    ///
    /// let jd = JulianDate::from_calendar(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    /// assert_eq!(jd.value(), 2_451_544.5);
    /// ```
    pub fn from_calendar(date: NaiveDate) -> Self {
        let mut year = f64::from(date.year());
        let mut month = f64::from(date.month());
        let day = f64::from(date.day());

        if month <= 2.0 {
            year -= 1.0;
            month += 12.0;
        }

        let a = (year / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();

        Self::new(
            (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + day + b
                - 1524.5,
        )
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Days elapsed since J2000.0.
    #[inline]
    pub fn days_since_j2000(&self) -> Days {
        *self - Self::J2000
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Julian Day: {}", self.quantity)
    }
}

impl From<NaiveDate> for JulianDate {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        Self::from_calendar(date)
    }
}

impl Sub for JulianDate {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}
