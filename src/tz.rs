// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Timezone and calendar utilities.
//!
//! All zone lookups go through the IANA database bundled by `chrono-tz`, so
//! results do not depend on the host's locale or `TZ` setting.
//!
//! - [`timezone_offset`] / [`offset_at`]: DST-aware UTC offset in hours.
//! - [`timezone_convert`]: wall-clock reading of an instant in a zone.
//! - [`date_range`]: inclusive instant ranges.
//! - [`start_of_day`] / [`local_midnight`]: the time-stripped "naive date".

use chrono::{
    DateTime, DurationRound, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta,
    TimeZone, Utc,
};
use chrono_tz::Tz;
use log::warn;
use qtty::Hours;

use crate::duration::Duration;
use crate::error::{Error, Result};

/// Resolve an IANA identifier such as `"America/Toronto"`.
pub fn parse_zone(zone_id: &str) -> Result<Tz> {
    zone_id
        .parse::<Tz>()
        .map_err(|_| Error::UnknownTimeZone(zone_id.to_string()))
}

/// UTC offset of `zone` at `instant`, in hours (fractional for half- and
/// quarter-hour zones).
///
/// Computed as the signed difference between the instant's wall-clock
/// reading in `zone` and in UTC. Both readings are full date-times, so an
/// instant near midnight at the end of a month still yields an offset within
/// a single day.
pub fn offset_at<Z: TimeZone>(zone: &Z, instant: &DateTime<Utc>) -> Hours {
    let local = instant.with_timezone(zone).naive_local();
    let utc = instant.naive_utc();
    Hours::new((local - utc).num_seconds() as f64 / 3_600.0)
}

/// UTC offset of the zone named `zone_id`, in hours.
///
/// With `instant == None` the offset in force now (truncated to the top of
/// the hour) is returned.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use salah::tz::timezone_offset;
///
/// let before = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
/// let after = Utc.with_ymd_and_hms(2024, 3, 11, 12, 0, 0).unwrap();
/// assert_eq!(timezone_offset("America/Toronto", Some(before)).unwrap().value(), -5.0);
/// assert_eq!(timezone_offset("America/Toronto", Some(after)).unwrap().value(), -4.0);
/// ```
pub fn timezone_offset(zone_id: &str, instant: Option<DateTime<Utc>>) -> Result<Hours> {
    let zone = parse_zone(zone_id)?;
    let instant = instant.unwrap_or_else(now_on_the_hour);
    Ok(offset_at(&zone, &instant))
}

/// The current instant, truncated to the top of the hour.
pub(crate) fn now_on_the_hour() -> DateTime<Utc> {
    let now = Utc::now();
    now.duration_trunc(TimeDelta::hours(1)).unwrap_or(now)
}

/// Wall-clock reading of `instant` in the zone named `zone_id`.
///
/// The hour component is always in `0..24`: an instant at local midnight
/// reads as `00:00` of the following day, never `24:00`.
pub fn timezone_convert(zone_id: &str, instant: &DateTime<Utc>) -> Result<NaiveDateTime> {
    let zone = parse_zone(zone_id)?;
    Ok(instant.with_timezone(&zone).naive_local())
}

/// Inclusive range of instants from `start` to `end`, advancing by `step`.
///
/// The last element is always exactly `end`, so the final gap may be
/// shorter than `step`.
///
/// # Errors
/// * [`Error::NonPositiveStep`] when `step <= 0`
/// * [`Error::EmptyRange`] when `end <= start`
/// * [`Error::StepTooLarge`] when `step > end - start`
/// * [`Error::OutOfRange`] when a step cannot be applied, or rounds to
///   nothing at microsecond resolution
pub fn date_range<Z: TimeZone>(
    start: &DateTime<Z>,
    end: &DateTime<Z>,
    step: Duration,
) -> Result<Vec<DateTime<Z>>> {
    if !step.is_positive() {
        return Err(Error::NonPositiveStep(step.milliseconds()));
    }
    let span = Duration::from_difference(start, end);
    if !span.is_positive() {
        return Err(Error::EmptyRange);
    }
    if span < step {
        return Err(Error::StepTooLarge {
            step_ms: step.milliseconds(),
            span_ms: span.milliseconds(),
        });
    }

    let mut range = vec![start.clone()];
    let mut cursor = Duration::add(start, step)?;
    if cursor <= *start {
        return Err(Error::OutOfRange(format!(
            "step of {step} does not advance past {}",
            start.naive_utc()
        )));
    }
    while cursor < *end {
        let next = Duration::add(&cursor, step)?;
        range.push(cursor);
        cursor = next;
    }
    range.push(end.clone());
    Ok(range)
}

/// Local midnight of the calendar day `instant` falls on, in its own zone.
pub fn start_of_day<Z: TimeZone>(instant: &DateTime<Z>) -> Result<DateTime<Z>> {
    local_midnight(instant.date_naive(), &instant.timezone())
}

/// The instant at which `date` begins in `zone`.
///
/// If midnight is skipped by a DST gap the wall-clock reading is interpreted
/// with the offset in force before the gap; if it occurs twice the earlier
/// instant is used.
pub fn local_midnight<Z: TimeZone>(date: NaiveDate, zone: &Z) -> Result<DateTime<Z>> {
    let naive = date.and_time(NaiveTime::MIN);
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => {
            let before = naive - TimeDelta::days(1);
            let offset = zone.offset_from_local_datetime(&before).earliest().ok_or_else(|| {
                Error::OutOfRange(format!("no offset before local midnight of {date}"))
            })?;
            let fixed = offset.fix();
            warn!("local midnight of {date} is skipped by a DST gap (using offset {fixed})");
            let utc = naive - TimeDelta::seconds(i64::from(fixed.local_minus_utc()));
            Ok(zone.from_utc_datetime(&utc))
        }
    }
}

/// Today's calendar date in `zone`.
pub fn today<Z: TimeZone>(zone: &Z) -> NaiveDate {
    Utc::now().with_timezone(zone).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn toronto_local(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        chrono_tz::America::Toronto
            .with_ymd_and_hms(y, m, d, h, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_offset_non_dst_zones() {
        assert_eq!(timezone_offset("Asia/Karachi", None).unwrap().value(), 5.0);
        assert_eq!(timezone_offset("Asia/Shanghai", None).unwrap().value(), 8.0);
    }

    #[test]
    fn test_offset_fractional_zones() {
        let when = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(
            timezone_offset("Asia/Kolkata", Some(when)).unwrap().value(),
            5.5
        );
        assert_eq!(
            timezone_offset("Asia/Kathmandu", Some(when)).unwrap().value(),
            5.75
        );
    }

    #[test]
    fn test_offset_for_a_specified_date() {
        let mar9 = toronto_local(2024, 3, 9, 0);
        let mar11 = toronto_local(2024, 3, 11, 0);
        assert_eq!(
            timezone_offset("America/Toronto", Some(mar9)).unwrap().value(),
            -5.0
        );
        assert_eq!(
            timezone_offset("America/Toronto", Some(mar11)).unwrap().value(),
            -4.0
        );
    }

    #[test]
    fn test_offset_flips_at_dst_transition() {
        // 2024-03-10 02:00 EST == 07:00 UTC, when clocks jump to 03:00 EDT.
        let before = Utc.with_ymd_and_hms(2024, 3, 10, 6, 59, 59).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 3, 10, 7, 0, 0).unwrap();
        assert_eq!(
            timezone_offset("America/Toronto", Some(before))
                .unwrap()
                .value(),
            -5.0
        );
        assert_eq!(
            timezone_offset("America/Toronto", Some(at)).unwrap().value(),
            -4.0
        );
        assert_eq!(
            timezone_offset("America/Toronto", Some(toronto_local(2024, 3, 10, 0)))
                .unwrap()
                .value(),
            -5.0
        );
        assert_eq!(
            timezone_offset("America/Toronto", Some(toronto_local(2024, 3, 10, 3)))
                .unwrap()
                .value(),
            -4.0
        );
    }

    #[test]
    fn test_offset_across_month_boundary() {
        // 23:30 UTC on Jan 31 is already Feb 1 in Tokyo and still Jan 31 in Honolulu.
        let when = Utc.with_ymd_and_hms(2024, 1, 31, 23, 30, 0).unwrap();
        assert_eq!(timezone_offset("Asia/Tokyo", Some(when)).unwrap().value(), 9.0);
        assert_eq!(
            timezone_offset("Pacific/Honolulu", Some(when))
                .unwrap()
                .value(),
            -10.0
        );
        let when = Utc.with_ymd_and_hms(2024, 3, 1, 1, 0, 0).unwrap();
        assert_eq!(
            timezone_offset("America/Los_Angeles", Some(when))
                .unwrap()
                .value(),
            -8.0
        );
    }

    #[test]
    fn test_unknown_zone() {
        let err = timezone_offset("Mars/Olympus_Mons", None).unwrap_err();
        assert_eq!(err, Error::UnknownTimeZone("Mars/Olympus_Mons".into()));
        assert!(timezone_convert("Nowhere", &Utc::now()).is_err());
    }

    #[test]
    fn test_timezone_convert() {
        let feb13_noon_toronto = toronto_local(2024, 2, 13, 12);
        let shanghai = timezone_convert("Asia/Shanghai", &feb13_noon_toronto).unwrap();
        assert_eq!(shanghai.year(), 2024);
        assert_eq!(shanghai.month(), 2);
        assert_eq!(shanghai.day(), 14);
        assert_eq!(shanghai.hour(), 1);
    }

    #[test]
    fn test_timezone_convert_midnight_rolls_over() {
        // 16:00 UTC is exactly midnight in Shanghai.
        let when = Utc.with_ymd_and_hms(2024, 2, 29, 16, 0, 0).unwrap();
        let local = timezone_convert("Asia/Shanghai", &when).unwrap();
        assert_eq!((local.month(), local.day(), local.hour()), (3, 1, 0));
    }

    #[test]
    fn test_date_range_daily_step() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 8, 15, 0).unwrap();
        let end = start + TimeDelta::days(2);
        let range = date_range(&start, &end, Duration::from_hours(24.0)).unwrap();
        assert_eq!(range.len(), 3);
        assert_eq!(range[0], start);
        assert_eq!(range[2], end);
        assert_eq!(Duration::from_difference(&range[0], &range[1]).days(), 1.0);
    }

    #[test]
    fn test_date_range_hourly_step() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 8, 15, 0).unwrap();
        let end = start + TimeDelta::days(1);
        let range = date_range(&start, &end, Duration::from_hours(1.0)).unwrap();
        assert_eq!(range.len(), 25);
        assert_eq!(range[0], start);
        assert_eq!(range[24], end);
        assert_eq!(Duration::from_difference(&range[0], &range[1]).hours(), 1.0);
    }

    #[test]
    fn test_date_range_irregular_tail() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let end = start + TimeDelta::hours(50);
        let range = date_range(&start, &end, Duration::from_hours(24.0)).unwrap();
        assert_eq!(range.len(), 4);
        assert_eq!(range[3], end);
        assert_eq!(Duration::from_difference(&range[2], &range[3]).hours(), 2.0);
    }

    #[test]
    fn test_date_range_errors() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let end = start + TimeDelta::hours(12);
        let day = Duration::from_hours(24.0);
        assert_eq!(date_range(&end, &start, day), Err(Error::EmptyRange));
        assert_eq!(date_range(&start, &start, day), Err(Error::EmptyRange));
        assert!(matches!(
            date_range(&start, &end, day),
            Err(Error::StepTooLarge { .. })
        ));
        assert!(matches!(
            date_range(&start, &end, Duration::ZERO),
            Err(Error::NonPositiveStep(_))
        ));
        // step == span is allowed and yields both endpoints.
        let both = date_range(&start, &end, Duration::from_hours(12.0)).unwrap();
        assert_eq!(both, vec![start, end]);
    }

    #[test]
    fn test_date_range_at_chrono_limits_fails_fast() {
        let start = Utc.with_ymd_and_hms(-200_000, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(200_000, 1, 1, 0, 0, 0).unwrap();
        let step = Duration::from_days(300_000.0 * 365.25);
        assert!(matches!(
            date_range(&start, &end, step),
            Err(Error::OutOfRange(_))
        ));

        // Positive, but below one microsecond.
        let tiny = Duration::from_milliseconds(1e-4);
        assert!(matches!(
            date_range(&start, &(start + TimeDelta::seconds(1)), tiny),
            Err(Error::OutOfRange(_))
        ));
    }

    #[test]
    fn test_start_of_day() {
        let zone = chrono_tz::Asia::Karachi;
        let instant = zone.with_ymd_and_hms(2024, 2, 12, 17, 41, 5).unwrap();
        let midnight = start_of_day(&instant).unwrap();
        assert_eq!(midnight.date_naive(), instant.date_naive());
        assert_eq!(midnight.time(), NaiveTime::MIN);
    }

    #[test]
    fn test_local_midnight_in_dst_gap() {
        // Santiago springs forward at local midnight (2024-09-08 00:00 -> 01:00).
        let zone = chrono_tz::America::Santiago;
        let date = NaiveDate::from_ymd_opt(2024, 9, 8).unwrap();
        let midnight = local_midnight(date, &zone).unwrap();
        assert_eq!(midnight.date_naive(), date);
        assert_eq!(midnight.hour(), 1);
        assert_eq!(
            midnight.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2024, 9, 8, 4, 0, 0).unwrap()
        );
    }
}
