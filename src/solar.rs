// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-precision solar coordinates.
//!
//! Implements the U.S. Naval Observatory's approximate algorithm for the
//! Sun's apparent position, good to about one arcminute between 1950 and
//! 2050. Only the two quantities the prayer-time solver needs are returned:
//! the equation of time and the declination.
//!
//! ## References
//! * USNO, "Approximate Solar Coordinates" (archived FAQ page)

use qtty::*;

use crate::angle::{dmath, normalize, normalize_angle, normalize_hour};
use crate::julian::JulianDate;

/// Equation of time and declination of the Sun for one Julian Date.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SunCoords {
    /// Apparent minus mean solar time.
    pub equation_of_time: Hours,
    /// Declination of the Sun's centre.
    pub declination: Degrees,
}

impl SunCoords {
    /// Solar coordinates at `jd`.
    pub fn at(jd: JulianDate) -> Self {
        let d = jd.days_since_j2000().value();

        // Mean anomaly
        let g = Degrees::new(normalize_angle(357.529 + 0.985_600_28 * d));
        // Mean longitude
        let q = normalize_angle(280.459 + 0.985_647_36 * d);
        // Apparent ecliptic longitude (aberration included)
        let l = Degrees::new(normalize_angle(
            q + 1.915 * dmath::sin(g) + 0.020 * dmath::sin(g * 2.0),
        ));
        // Mean obliquity of the ecliptic
        let e = Degrees::new(23.439 - 0.000_000_36 * d);

        let ra = dmath::atan2(dmath::cos(e) * dmath::sin(l), dmath::cos(l));
        let ra_hours = normalize_hour(ra.value() / 15.0);

        // q and RA wrap at different instants near the March equinox; fold the
        // difference into [-12, 12) so it never jumps by a whole day.
        let eqt = normalize(q / 15.0 - ra_hours + 12.0, 24.0) - 12.0;

        Self {
            equation_of_time: Hours::new(eqt),
            declination: dmath::asin(dmath::sin(e) * dmath::sin(l)),
        }
    }
}
