// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The prayer-time engine.
//!
//! [`Salah`] is built once per (location, method, madhab, timezone) tuple and
//! then solves any timing for any calendar date. Each request runs the same
//! pipeline:
//!
//! ```text
//! date → Julian Date → (equation of time, declination) → hour angle
//!      → fractional hours since local midnight → absolute instant
//! ```
//!
//! All state is read-only after construction, so a `Salah` may be shared
//! across threads freely.
//!
//! # UTC offset
//!
//! Solar hours are expressed on the local clock, so every solve needs the
//! zone's UTC offset. With [`OffsetMode::PerDate`] (the default) the offset is
//! taken from each date's own local midnight, which is also the instant the
//! solved hours are added to; the result is correct on both sides of a DST
//! transition. [`OffsetMode::Fixed`] instead reuses one offset for every date.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use log::{debug, trace};
use qtty::*;

use crate::angle::dmath;
use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::julian::JulianDate;
use crate::method::{CalculationMethod, Madhab, MethodParam, TimingName};
use crate::solar::SunCoords;
use crate::tz::{local_midnight, now_on_the_hour, offset_at, parse_zone};

/// Zone used when [`SalahOptions::time_zone`] is not set.
pub const DEFAULT_TIME_ZONE: &str = "America/Toronto";

/// Largest supported absolute latitude, in degrees.
pub const MAX_LATITUDE: f64 = 60.0;

/// Apparent depression of the Sun's centre at sunrise/sunset: refraction
/// plus the solar semi-diameter.
pub const HORIZON_DEPRESSION: Degrees = Degrees::new(0.833);

// ═══════════════════════════════════════════════════════════════════════════
// Options
// ═══════════════════════════════════════════════════════════════════════════

/// Where the engine takes its UTC offset from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OffsetMode {
    /// Offset in force at each requested date's local midnight.
    #[default]
    PerDate,
    /// The offset in force at the given instant, reused for every date.
    ///
    /// Results drift by the DST shift for dates on the other side of a
    /// transition.
    Fixed(DateTime<Utc>),
}

/// Inputs to [`Salah::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct SalahOptions {
    /// Latitude in degrees, north positive.
    pub lat: f64,
    /// Longitude in degrees, east positive.
    pub lng: f64,
    /// IANA zone id. Defaults to [`DEFAULT_TIME_ZONE`].
    pub time_zone: Option<String>,
    /// Defaults to [`Madhab::Shafi`].
    pub madhab: Option<Madhab>,
    /// Defaults to [`CalculationMethod::mwl`].
    pub method: Option<CalculationMethod>,
    pub offset_mode: OffsetMode,
}

impl SalahOptions {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            time_zone: None,
            madhab: None,
            method: None,
            offset_mode: OffsetMode::default(),
        }
    }

    pub fn with_time_zone(mut self, zone_id: impl Into<String>) -> Self {
        self.time_zone = Some(zone_id.into());
        self
    }

    pub fn with_madhab(mut self, madhab: Madhab) -> Self {
        self.madhab = Some(madhab);
        self
    }

    pub fn with_method(mut self, method: CalculationMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_offset_mode(mut self, mode: OffsetMode) -> Self {
        self.offset_mode = mode;
        self
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Batch date selection
// ═══════════════════════════════════════════════════════════════════════════

/// Dates for [`Salah::get_timings`]: one date for every name, or one date per
/// name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Dates<'a> {
    Single(NaiveDate),
    PerName(&'a [NaiveDate]),
}

impl From<NaiveDate> for Dates<'_> {
    fn from(date: NaiveDate) -> Self {
        Dates::Single(date)
    }
}

impl<'a> From<&'a [NaiveDate]> for Dates<'a> {
    fn from(dates: &'a [NaiveDate]) -> Self {
        Dates::PerName(dates)
    }
}

impl<'a> From<&'a Vec<NaiveDate>> for Dates<'a> {
    fn from(dates: &'a Vec<NaiveDate>) -> Self {
        Dates::PerName(dates.as_slice())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Engine
// ═══════════════════════════════════════════════════════════════════════════

/// Side of solar noon an hour angle is measured towards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Direction {
    BeforeNoon,
    AfterNoon,
}

impl Direction {
    #[inline]
    const fn sign(self) -> f64 {
        match self {
            Direction::BeforeNoon => -1.0,
            Direction::AfterNoon => 1.0,
        }
    }
}

/// Everything the solvers need for one calendar date.
#[derive(Debug, Clone)]
struct SolarDay {
    date: NaiveDate,
    /// Local midnight; solved hours are added to this instant.
    anchor: DateTime<Tz>,
    offset: Hours,
    sun: SunCoords,
}

/// Prayer-time calculator for one location, method, madhab and zone.
#[derive(Debug, Clone)]
pub struct Salah {
    lat: f64,
    lng: f64,
    zone_id: String,
    zone: Tz,
    madhab: Madhab,
    method: CalculationMethod,
    tz_offset: Hours,
    offset_mode: OffsetMode,
}

impl Salah {
    /// Build an engine, filling in defaults.
    ///
    /// # Errors
    /// * [`Error::UnsupportedLatitude`] when `|lat| > 60`
    /// * [`Error::UnknownTimeZone`] for an unrecognised zone id
    pub fn new(opts: SalahOptions) -> Result<Self> {
        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&opts.lat) {
            return Err(Error::UnsupportedLatitude(opts.lat));
        }
        let zone_id = opts
            .time_zone
            .unwrap_or_else(|| DEFAULT_TIME_ZONE.to_string());
        let zone = parse_zone(&zone_id)?;

        let reference = match opts.offset_mode {
            OffsetMode::PerDate => now_on_the_hour(),
            OffsetMode::Fixed(at) => at,
        };
        let tz_offset = offset_at(&zone, &reference);

        let madhab = opts.madhab.unwrap_or_default();
        let method = opts.method.unwrap_or_default();
        debug!(
            "salah engine at ({}, {}) in {zone_id} (UTC{:+}), {madhab}, {}",
            opts.lat,
            opts.lng,
            tz_offset.value(),
            method.id
        );

        Ok(Self {
            lat: opts.lat,
            lng: opts.lng,
            zone_id,
            zone,
            madhab,
            method,
            tz_offset,
            offset_mode: opts.offset_mode,
        })
    }

    // ── accessors ─────────────────────────────────────────────────────

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// The resolved IANA zone id.
    pub fn time_zone(&self) -> &str {
        &self.zone_id
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn madhab(&self) -> Madhab {
        self.madhab
    }

    pub fn method(&self) -> &CalculationMethod {
        &self.method
    }

    pub fn offset_mode(&self) -> OffsetMode {
        self.offset_mode
    }

    /// UTC offset captured at construction (at the [`OffsetMode::Fixed`]
    /// reference instant, otherwise at the top of the current hour).
    pub fn tz_offset(&self) -> Hours {
        self.tz_offset
    }

    // ── per-timing solvers ────────────────────────────────────────────

    /// Dawn: the Sun at the method's Fajr depression before noon, or a fixed
    /// interval before Sunrise.
    pub fn fajr(&self, date: NaiveDate) -> Result<DateTime<Tz>> {
        match self.method.fajr {
            MethodParam::Angle(angle) => {
                let day = self.solar_day(date)?;
                let hour = self.horizon_hour_angle(angle, &day, Direction::BeforeNoon);
                self.finish(TimingName::Fajr, &day, hour)
            }
            MethodParam::Interval(before) => Duration::add(&self.sunrise(date)?, -before),
        }
    }

    pub fn sunrise(&self, date: NaiveDate) -> Result<DateTime<Tz>> {
        let day = self.solar_day(date)?;
        let hour = self.horizon_hour_angle(HORIZON_DEPRESSION, &day, Direction::BeforeNoon);
        self.finish(TimingName::Sunrise, &day, hour)
    }

    /// Solar noon.
    pub fn dhuhr(&self, date: NaiveDate) -> Result<DateTime<Tz>> {
        let day = self.solar_day(date)?;
        let hour = self.zenith(&day);
        self.finish(TimingName::Dhuhr, &day, Some(hour))
    }

    pub fn asr(&self, date: NaiveDate) -> Result<DateTime<Tz>> {
        let day = self.solar_day(date)?;
        let hour = self.shadow_length_hour(self.madhab.shadow_multiplier(), &day);
        self.finish(TimingName::Asr, &day, hour)
    }

    pub fn maghrib(&self, date: NaiveDate) -> Result<DateTime<Tz>> {
        let day = self.solar_day(date)?;
        let hour = self.horizon_hour_angle(HORIZON_DEPRESSION, &day, Direction::AfterNoon);
        self.finish(TimingName::Maghrib, &day, hour)
    }

    /// Nightfall: the Sun at the method's Isha depression after noon, or a
    /// fixed interval after Maghrib.
    pub fn isha(&self, date: NaiveDate) -> Result<DateTime<Tz>> {
        match self.method.isha {
            MethodParam::Angle(angle) => {
                let day = self.solar_day(date)?;
                let hour = self.horizon_hour_angle(angle, &day, Direction::AfterNoon);
                self.finish(TimingName::Isha, &day, hour)
            }
            MethodParam::Interval(after) => Duration::add(&self.maghrib(date)?, after),
        }
    }

    /// Islamic midnight: halfway between Maghrib on `date` and Sunrise on the
    /// following day.
    pub fn midnight(&self, date: NaiveDate) -> Result<DateTime<Tz>> {
        let tomorrow = date
            .succ_opt()
            .ok_or_else(|| Error::OutOfRange(format!("no day after {date}")))?;
        let sunset = self.maghrib(date)?;
        let next_sunrise = self.sunrise(tomorrow)?;
        let night = Duration::from_difference(&sunset, &next_sunrise);
        Duration::add(&sunset, night / 2.0)
    }

    // ── dispatch ──────────────────────────────────────────────────────

    /// Solve the timing `name` on `date`.
    pub fn get_timing(&self, name: TimingName, date: NaiveDate) -> Result<DateTime<Tz>> {
        match name {
            TimingName::Fajr => self.fajr(date),
            TimingName::Sunrise => self.sunrise(date),
            TimingName::Dhuhr => self.dhuhr(date),
            TimingName::Asr => self.asr(date),
            TimingName::Maghrib => self.maghrib(date),
            TimingName::Isha => self.isha(date),
            TimingName::Midnight => self.midnight(date),
        }
    }

    /// Solve several timings at once.
    ///
    /// With [`Dates::Single`] every name is solved for the same date; with
    /// [`Dates::PerName`] `names[i]` is solved for `dates[i]`.
    ///
    /// # Errors
    /// [`Error::LengthMismatch`] when `names` and `dates` differ in length.
    pub fn get_timings<'a>(
        &self,
        names: &[TimingName],
        dates: impl Into<Dates<'a>>,
    ) -> Result<Vec<DateTime<Tz>>> {
        match dates.into() {
            Dates::Single(date) => names
                .iter()
                .map(|&name| self.get_timing(name, date))
                .collect(),
            Dates::PerName(dates) => {
                if names.len() != dates.len() {
                    return Err(Error::LengthMismatch {
                        names: names.len(),
                        dates: dates.len(),
                    });
                }
                names
                    .iter()
                    .zip(dates)
                    .map(|(&name, &date)| self.get_timing(name, date))
                    .collect()
            }
        }
    }

    // ── solver internals ──────────────────────────────────────────────

    fn solar_day(&self, date: NaiveDate) -> Result<SolarDay> {
        let anchor = local_midnight(date, &self.zone)?;
        let offset = match self.offset_mode {
            // Implied by the anchor itself, so a midnight moved by a DST gap
            // stays consistent with the hours added to it.
            OffsetMode::PerDate => {
                let wall = date.and_time(NaiveTime::MIN);
                Hours::new((wall - anchor.naive_utc()).num_seconds() as f64 / 3_600.0)
            }
            OffsetMode::Fixed(_) => self.tz_offset,
        };
        let sun = SunCoords::at(JulianDate::from_calendar(date));
        Ok(SolarDay {
            date,
            anchor,
            offset,
            sun,
        })
    }

    /// Local clock hour of solar noon.
    fn zenith(&self, day: &SolarDay) -> f64 {
        12.0 + day.offset.value() - self.lng / 15.0 - day.sun.equation_of_time.value()
    }

    /// Hour at which the Sun's centre is `angle` below the horizon, on the
    /// `direction` side of noon. `None` if the Sun never gets there.
    fn horizon_hour_angle(
        &self,
        angle: Degrees,
        day: &SolarDay,
        direction: Direction,
    ) -> Option<f64> {
        let lat = Degrees::new(self.lat);
        let decl = day.sun.declination;
        let cos_t = (-dmath::sin(angle) - dmath::sin(lat) * dmath::sin(decl))
            / (dmath::cos(lat) * dmath::cos(decl));
        let t = dmath::acos_checked(cos_t)?.value() / 15.0;
        Some(self.zenith(day) + t * direction.sign())
    }

    /// Afternoon hour at which a shadow is `multiplier` object lengths longer
    /// than at noon.
    fn shadow_length_hour(&self, multiplier: f64, day: &SolarDay) -> Option<f64> {
        let lat = Degrees::new(self.lat);
        let decl = day.sun.declination;
        let noon_shadow = dmath::tan(Degrees::new((self.lat - decl.value()).abs()));
        let altitude = dmath::acot(multiplier + noon_shadow);
        let cos_t = (dmath::sin(altitude) - dmath::sin(lat) * dmath::sin(decl))
            / (dmath::cos(lat) * dmath::cos(decl));
        let t = dmath::acos_checked(cos_t)?.value() / 15.0;
        Some(self.zenith(day) + t)
    }

    /// Turn a solved hour into an instant, or report the timing unreachable.
    fn finish(
        &self,
        timing: TimingName,
        day: &SolarDay,
        hour: Option<f64>,
    ) -> Result<DateTime<Tz>> {
        let hour = hour.ok_or(Error::Unreachable {
            timing,
            date: day.date,
        })?;
        trace!("{timing} on {}: {hour:.4} h after local midnight", day.date);
        hour_to_instant(hour, &day.anchor)
    }
}

/// `midnight + hour`, with `hour` in fractional hours.
fn hour_to_instant(hour: f64, midnight: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    Duration::add(midnight, Duration::from_hours(hour))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use chrono::{Datelike, TimeZone, Timelike};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// The reference location with every other parameter left at its default.
    fn whitby() -> Salah {
        Salah::new(
            SalahOptions::new(43.8975, -78.9429)
                .with_time_zone("America/Toronto")
                .with_madhab(Madhab::Hanafi),
        )
        .unwrap()
    }

    /// Minutes between `actual` and the local wall-clock reading `h:m` on
    /// `date` in the engine's zone.
    fn minutes_off(salah: &Salah, actual: DateTime<Tz>, date: NaiveDate, h: u32, m: u32) -> f64 {
        let expected = salah
            .zone()
            .from_local_datetime(&date.and_hms_opt(h, m, 0).unwrap())
            .unwrap();
        Duration::from_difference(&expected, &actual).minutes().abs()
    }

    #[test]
    fn test_reference_day_with_default_method() {
        let salah = whitby();
        assert_eq!(salah.method(), &CalculationMethod::default());
        let date = ymd(2024, 2, 12);
        let expected = [
            (TimingName::Fajr, date, 5, 59),
            (TimingName::Sunrise, date, 7, 20),
            (TimingName::Dhuhr, date, 12, 30),
            (TimingName::Asr, date, 15, 57),
            (TimingName::Maghrib, date, 17, 41),
            (TimingName::Isha, date, 19, 1),
            (TimingName::Midnight, ymd(2024, 2, 13), 0, 30),
        ];
        for (name, local_date, h, m) in expected {
            let actual = salah.get_timing(name, date).unwrap();
            let off = minutes_off(&salah, actual, local_date, h, m);
            assert!(off < 6.0, "{name}: {actual} is {off:.1} min from {h:02}:{m:02}");
        }
    }

    #[test]
    fn test_defaults() {
        let salah = Salah::new(SalahOptions::new(43.65, -79.38)).unwrap();
        assert_eq!(salah.time_zone(), DEFAULT_TIME_ZONE);
        assert_eq!(salah.madhab(), Madhab::Shafi);
        assert_eq!(salah.method().id, "MWL");
        assert_eq!(salah.offset_mode(), OffsetMode::PerDate);
        let offset = salah.tz_offset().value();
        assert!(offset == -5.0 || offset == -4.0);
    }

    #[test]
    fn test_rejects_polar_latitudes() {
        for lat in [60.5, -61.0, 89.0, f64::NAN] {
            let err = Salah::new(SalahOptions::new(lat, 0.0)).unwrap_err();
            assert!(matches!(err, Error::UnsupportedLatitude(_)));
            assert_eq!(err.kind(), ErrorKind::Configuration);
        }
        assert!(Salah::new(SalahOptions::new(60.0, 0.0)).is_ok());
        assert!(Salah::new(SalahOptions::new(-60.0, 0.0)).is_ok());
    }

    #[test]
    fn test_rejects_unknown_zone() {
        let err = Salah::new(SalahOptions::new(0.0, 0.0).with_time_zone("Europe/Atlantis"))
            .unwrap_err();
        assert_eq!(err, Error::UnknownTimeZone("Europe/Atlantis".into()));
    }

    #[test]
    fn test_ordering_through_the_year() {
        let salah = whitby();
        let mut date = ymd(2024, 1, 1);
        while date.year() == 2024 {
            let t = salah.get_timings(&TimingName::ALL[..6], date).unwrap();
            assert!(
                t.windows(2).all(|w| w[0] < w[1]),
                "timings out of order on {date}: {t:?}"
            );
            date = date + chrono::Days::new(7);
        }
    }

    #[test]
    fn test_midnight_is_midpoint_of_night() {
        let salah = whitby();
        for date in [ymd(2024, 2, 12), ymd(2024, 6, 21), ymd(2024, 11, 2)] {
            let sunset = salah.maghrib(date).unwrap();
            let sunrise = salah.sunrise(date.succ_opt().unwrap()).unwrap();
            let mid = salah.midnight(date).unwrap();
            assert!(sunset < mid && mid < sunrise);
            let before = Duration::from_difference(&sunset, &mid).seconds();
            let after = Duration::from_difference(&mid, &sunrise).seconds();
            assert!((before - after).abs() < 1e-3);
        }
    }

    #[test]
    fn test_per_date_offset_follows_dst() {
        let salah = whitby();
        // Solar noon barely moves over two days; the clock jumps by an hour.
        let before = salah.dhuhr(ymd(2024, 3, 9)).unwrap();
        let after = salah.dhuhr(ymd(2024, 3, 11)).unwrap();
        assert_eq!(before.hour(), 12);
        assert_eq!(after.hour(), 13);
        let day_span = Duration::from_difference(&before, &after).hours();
        assert!((day_span - 48.0).abs() < 0.05);
    }

    #[test]
    fn test_fixed_offset_reproduces_cached_behaviour() {
        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let fixed = Salah::new(
            SalahOptions::new(43.8975, -78.9429)
                .with_method(CalculationMethod::isna())
                .with_offset_mode(OffsetMode::Fixed(winter)),
        )
        .unwrap();
        assert_eq!(fixed.tz_offset(), Hours::new(-5.0));

        let per_date = whitby();
        let date = ymd(2024, 7, 1);
        let drift = Duration::from_difference(
            &per_date.dhuhr(date).unwrap(),
            &fixed.dhuhr(date).unwrap(),
        );
        assert!((drift.hours() + 1.0).abs() < 1e-6);

        // Same offset in winter: identical results.
        let jan = ymd(2024, 1, 20);
        assert_eq!(fixed.dhuhr(jan).unwrap(), per_date.dhuhr(jan).unwrap());
    }

    #[test]
    fn test_interval_isha_follows_maghrib() {
        let salah = Salah::new(
            SalahOptions::new(21.4225, 39.8262)
                .with_time_zone("Asia/Riyadh")
                .with_method(CalculationMethod::makkah()),
        )
        .unwrap();
        let date = ymd(2024, 3, 20);
        let maghrib = salah.maghrib(date).unwrap();
        let isha = salah.isha(date).unwrap();
        assert_eq!(Duration::from_difference(&maghrib, &isha).minutes(), 90.0);
        assert_eq!(maghrib.hour(), 18);
    }

    #[test]
    fn test_interval_fajr_precedes_sunrise() {
        let method = CalculationMethod::new(
            "Fixed",
            "Fixed intervals",
            MethodParam::minutes(75.0),
            MethodParam::minutes(75.0),
        );
        let salah = Salah::new(
            SalahOptions::new(33.5, 73.0)
                .with_time_zone("Asia/Karachi")
                .with_method(method),
        )
        .unwrap();
        let date = ymd(2024, 9, 1);
        let gap = Duration::from_difference(
            &salah.fajr(date).unwrap(),
            &salah.sunrise(date).unwrap(),
        );
        assert!((gap.minutes() - 75.0).abs() < 1e-6);
    }

    #[test]
    fn test_southern_hemisphere_asr() {
        let salah = Salah::new(
            SalahOptions::new(-33.87, 151.21).with_time_zone("Australia/Sydney"),
        )
        .unwrap();
        let date = ymd(2024, 6, 21);
        let dhuhr = salah.dhuhr(date).unwrap();
        let asr = salah.asr(date).unwrap();
        let maghrib = salah.maghrib(date).unwrap();
        assert!(dhuhr < asr && asr < maghrib);
        assert_eq!(asr.hour(), 14);
    }

    #[test]
    fn test_hanafi_asr_is_later() {
        let date = ymd(2024, 4, 10);
        let shafi = Salah::new(SalahOptions::new(43.8975, -78.9429)).unwrap();
        let hanafi = Salah::new(SalahOptions::new(43.8975, -78.9429).with_madhab(Madhab::Hanafi))
            .unwrap();
        let gap = Duration::from_difference(&shafi.asr(date).unwrap(), &hanafi.asr(date).unwrap());
        assert!(gap.minutes() > 30.0 && gap.minutes() < 90.0);
    }

    #[test]
    fn test_unreachable_angle_is_an_error() {
        // At 58°N around the June solstice the Sun stays within ~9° of the
        // horizon all night, so a 15° Fajr never happens.
        let salah = Salah::new(
            SalahOptions::new(58.0, 12.0)
                .with_time_zone("Europe/Stockholm")
                .with_method(CalculationMethod::mwl()),
        )
        .unwrap();
        let date = ymd(2024, 6, 21);
        let err = salah.fajr(date).unwrap_err();
        assert_eq!(
            err,
            Error::Unreachable {
                timing: TimingName::Fajr,
                date
            }
        );
        assert_eq!(err.kind(), ErrorKind::Unreachable);
        // Sunrise and sunset still exist.
        assert!(salah.sunrise(date).is_ok());
        assert!(salah.maghrib(date).is_ok());
    }

    #[test]
    fn test_get_timings_batch_forms() {
        let salah = whitby();
        let date = ymd(2024, 2, 12);
        let names = [TimingName::Fajr, TimingName::Dhuhr, TimingName::Isha];

        let single = salah.get_timings(&names, date).unwrap();
        assert_eq!(single.len(), 3);
        assert_eq!(single[1], salah.dhuhr(date).unwrap());

        let dates = vec![date, ymd(2024, 2, 13), ymd(2024, 2, 14)];
        let parallel = salah.get_timings(&names, &dates).unwrap();
        assert_eq!(parallel[0], salah.fajr(dates[0]).unwrap());
        assert_eq!(parallel[2], salah.isha(dates[2]).unwrap());

        let err = salah.get_timings(&names, &dates[..2]).unwrap_err();
        assert_eq!(err, Error::LengthMismatch { names: 3, dates: 2 });
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        let salah = std::sync::Arc::new(whitby());
        let handles: Vec<_> = (1..=4)
            .map(|day| {
                let salah = std::sync::Arc::clone(&salah);
                std::thread::spawn(move || salah.dhuhr(ymd(2024, 2, day)).unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().hour(), 12);
        }
    }
}
