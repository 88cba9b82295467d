// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Daily Islamic prayer timings
//!
//! Computes the seven daily timings (Fajr, Sunrise, Dhuhr, Asr, Maghrib,
//! Isha and Islamic midnight) for a location, a calculation method, a
//! madhab and an IANA timezone, using a low-precision solar model.
//!
//! # Core types
//!
//! - [`Salah`]: the engine; one per location/method/madhab/zone tuple.
//! - [`SalahOptions`]: engine inputs with builder-style setters.
//! - [`CalculationMethod`] / [`MethodParam`]: Fajr and Isha parameters,
//!   either a depression angle or a fixed interval.
//! - [`MethodRegistry`]: the built-in methods, looked up by id.
//! - [`Madhab`]: selects the Asr shadow threshold.
//! - [`TimingName`]: the closed set of timings.
//! - [`Schedule`] / [`PrayerTimes`]: per-date grouping of results.
//! - [`JulianDate`], [`SunCoords`]: the astronomical layer.
//! - [`Duration`]: signed millisecond span used by interval methods.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use salah::{CalculationMethod, Madhab, Salah, SalahOptions};
//!
//! let salah = Salah::new(
//!     SalahOptions::new(43.8975, -78.9429)
//!         .with_time_zone("America/Toronto")
//!         .with_madhab(Madhab::Hanafi)
//!         .with_method(CalculationMethod::isna()),
//! )?;
//! let dhuhr = salah.dhuhr(NaiveDate::from_ymd_opt(2024, 2, 12).unwrap())?;
//! assert_eq!(dhuhr.format("%H").to_string(), "12");
//! # Ok::<(), salah::Error>(())
//! ```
//!
//! # Accuracy
//!
//! The solar model is good to about a minute between 1950 and 2050, and
//! latitudes beyond ±60° are rejected outright. Timings whose solar
//! depression is never reached on a date (Fajr and Isha in high-latitude
//! summers) fail with [`Error::Unreachable`].

pub mod angle;
pub mod config;
pub mod duration;
mod error;
pub mod julian;
pub mod method;
pub mod salah;
pub mod schedule;
pub mod solar;
pub mod tz;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use config::{MadhabSelector, SalahConfig};
pub use duration::Duration;
pub use error::{Error, ErrorKind, Result};
pub use julian::JulianDate;
pub use method::{CalculationMethod, Madhab, MethodParam, MethodRegistry, TimingName};
pub use salah::{Dates, OffsetMode, Salah, SalahOptions};
pub use schedule::{PrayerTimes, Resolved, Schedule, Timing};
pub use solar::SunCoords;
