// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-by-day prayer schedules.
//!
//! [`Schedule`] wraps a [`Salah`] engine and answers the two questions a
//! client usually asks: "what are the timings on this date?" and "what are
//! the timings for every day in this range?". Results are grouped per
//! calendar date as [`PrayerTimes`].
//!
//! Requested names are always emitted in chronological order with duplicates
//! removed; an empty request means every timing.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use chrono_tz::Tz;
use log::debug;

#[cfg(feature = "serde")]
use serde::{
    ser::{SerializeMap, SerializeStruct},
    Serialize, Serializer,
};

use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::method::{Madhab, TimingName};
use crate::salah::{Salah, SalahOptions};
use crate::tz::{date_range, today};

/// Default spacing between the dates of a range.
pub const DEFAULT_STEP: Duration = Duration::from_milliseconds(86_400_000.0);

// ═══════════════════════════════════════════════════════════════════════════
// Results
// ═══════════════════════════════════════════════════════════════════════════

/// One solved timing.
#[derive(Debug, Clone, PartialEq)]
pub struct Timing {
    pub name: TimingName,
    pub time: DateTime<Tz>,
}

impl Timing {
    /// Wall-clock reading in the engine's zone.
    pub fn local(&self) -> NaiveDateTime {
        self.time.naive_local()
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    pub fn second(&self) -> u32 {
        self.time.second()
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<8} {}", self.name, self.time.format("%Y-%m-%d %H:%M:%S %Z"))
    }
}

/// Every requested timing for one calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerTimes {
    pub date: NaiveDate,
    pub timings: Vec<Timing>,
}

impl PrayerTimes {
    pub fn get(&self, name: TimingName) -> Option<&Timing> {
        self.timings.iter().find(|t| t.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Timing> {
        self.timings.iter()
    }

    pub fn len(&self) -> usize {
        self.timings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timings.is_empty()
    }
}

impl fmt::Display for PrayerTimes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.date)?;
        for timing in &self.timings {
            writeln!(f, "  {timing}")?;
        }
        Ok(())
    }
}

/// The parameters actually used, after defaults were filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub time_zone: String,
    pub madhab: Madhab,
    pub method_id: String,
}

// ═══════════════════════════════════════════════════════════════════════════
// Schedule
// ═══════════════════════════════════════════════════════════════════════════

/// Per-date timing queries over one engine.
#[derive(Debug, Clone)]
pub struct Schedule {
    salah: Salah,
}

impl Schedule {
    pub fn new(options: SalahOptions) -> Result<Self> {
        Ok(Self {
            salah: Salah::new(options)?,
        })
    }

    pub fn engine(&self) -> &Salah {
        &self.salah
    }

    pub fn resolved(&self) -> Resolved {
        Resolved {
            time_zone: self.salah.time_zone().to_string(),
            madhab: self.salah.madhab(),
            method_id: self.salah.method().id.clone(),
        }
    }

    /// Timings on `date`, or on today's date in the engine's zone.
    pub fn by_date(&self, names: &[TimingName], date: Option<NaiveDate>) -> Result<PrayerTimes> {
        let date = date.unwrap_or_else(|| today(&self.salah.zone()));
        self.solve_day(&canonical(names), date)
    }

    pub fn today(&self, names: &[TimingName]) -> Result<PrayerTimes> {
        self.by_date(names, None)
    }

    /// Timings for every date from `start` to `end`, both inclusive.
    pub fn by_range(
        &self,
        names: &[TimingName],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PrayerTimes>> {
        self.by_range_with_step(names, start, end, DEFAULT_STEP)
    }

    /// Like [`Schedule::by_range`], visiting dates `step` apart.
    ///
    /// The walk runs between local noons so that a DST shift never carries an
    /// element across a date boundary. `end` is always included.
    ///
    /// # Errors
    /// * [`Error::EmptyRange`] unless `start < end`
    /// * [`Error::NonPositiveStep`] / [`Error::StepTooLarge`] for a bad `step`
    pub fn by_range_with_step(
        &self,
        names: &[TimingName],
        start: NaiveDate,
        end: NaiveDate,
        step: Duration,
    ) -> Result<Vec<PrayerTimes>> {
        let zone = self.salah.zone();
        let instants = date_range(&local_noon(start, &zone)?, &local_noon(end, &zone)?, step)?;

        let mut dates: Vec<NaiveDate> = instants.iter().map(DateTime::date_naive).collect();
        dates.dedup();
        debug!("schedule {start}..={end}: {} dates, step {step}", dates.len());

        let names = canonical(names);
        dates
            .into_iter()
            .map(|date| self.solve_day(&names, date))
            .collect()
    }

    fn solve_day(&self, names: &[TimingName], date: NaiveDate) -> Result<PrayerTimes> {
        let times = self.salah.get_timings(names, date)?;
        let timings = names
            .iter()
            .zip(times)
            .map(|(&name, time)| Timing { name, time })
            .collect();
        Ok(PrayerTimes { date, timings })
    }
}

/// Sorted, deduplicated names; all of them when `names` is empty.
fn canonical(names: &[TimingName]) -> Vec<TimingName> {
    if names.is_empty() {
        return TimingName::ALL.to_vec();
    }
    let mut names = names.to_vec();
    names.sort_unstable();
    names.dedup();
    names
}

fn local_noon(date: NaiveDate, zone: &Tz) -> Result<DateTime<Tz>> {
    let naive = date
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| Error::OutOfRange(format!("noon of {date}")))?;
    zone.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| Error::OutOfRange(format!("local noon of {date} does not exist")))
}

// ── Serde ─────────────────────────────────────────────────────────────────
//
// Instants are written as RFC 3339 strings carrying the local offset, dates
// as `YYYY-MM-DD`.

#[cfg(feature = "serde")]
impl Serialize for Timing {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Timing", 2)?;
        s.serialize_field("name", self.name.as_str())?;
        s.serialize_field("time", &self.time.to_rfc3339())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl Serialize for PrayerTimes {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        struct ByName<'a>(&'a [Timing]);

        impl Serialize for ByName<'_> {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for timing in self.0 {
                    map.serialize_entry(timing.name.as_str(), &timing.time.to_rfc3339())?;
                }
                map.end()
            }
        }

        let mut s = serializer.serialize_struct("PrayerTimes", 2)?;
        s.serialize_field("date", &self.date.to_string())?;
        s.serialize_field("timings", &ByName(&self.timings))?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl Serialize for Resolved {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Resolved", 3)?;
        s.serialize_field("timeZone", &self.time_zone)?;
        s.serialize_field("madhab", &self.madhab.code())?;
        s.serialize_field("method", &self.method_id)?;
        s.end()
    }
}
