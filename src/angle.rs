// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Degree-based trigonometry and range normalisation.
//!
//! The solar formulas are written in degrees throughout, so every wrapper in
//! [`dmath`] takes or returns [`Degrees`] and converts to radians internally.
//! Inverse functions follow IEEE‑754: arguments outside their domain yield
//! `NaN`. Use [`dmath::acos_checked`] where that must be detected.

use qtty::{Degree, Degrees, Radian, Radians};

/// Map `v` into `[0, modulus)` using a floored modulo.
///
/// Negative inputs wrap to the positive range: `normalize(-33.0, 360.0) == 327.0`.
#[inline]
pub fn normalize(v: f64, modulus: f64) -> f64 {
    v.rem_euclid(modulus)
}

/// Normalize an angle in degrees to `[0, 360)`.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    normalize(angle, 360.0)
}

/// Normalize a fractional hour of the day to `[0, 24)`.
#[inline]
pub fn normalize_hour(hour: f64) -> f64 {
    normalize(hour, 24.0)
}

/// Degrees → radians.
#[inline]
pub fn deg2rad(deg: f64) -> f64 {
    Degrees::new(deg).to::<Radian>().value()
}

/// Radians → degrees.
#[inline]
pub fn rad2deg(rad: f64) -> f64 {
    Radians::new(rad).to::<Degree>().value()
}

/// Trigonometry in degrees.
pub mod dmath {
    use super::rad2deg;
    use qtty::Degrees;

    #[inline]
    pub fn sin(x: Degrees) -> f64 {
        x.sin()
    }

    #[inline]
    pub fn cos(x: Degrees) -> f64 {
        x.cos()
    }

    #[inline]
    pub fn tan(x: Degrees) -> f64 {
        x.tan()
    }

    /// Arcsine, in degrees.
    #[inline]
    pub fn asin(x: f64) -> Degrees {
        Degrees::new(rad2deg(x.asin()))
    }

    /// Arccosine, in degrees. `NaN` outside `[-1, 1]`.
    #[inline]
    pub fn acos(x: f64) -> Degrees {
        Degrees::new(rad2deg(x.acos()))
    }

    /// Arccosine that reports a domain violation instead of producing `NaN`.
    #[inline]
    pub fn acos_checked(x: f64) -> Option<Degrees> {
        if (-1.0..=1.0).contains(&x) {
            Some(acos(x))
        } else {
            None
        }
    }

    /// Arctangent, in degrees.
    #[inline]
    pub fn atan(x: f64) -> Degrees {
        Degrees::new(rad2deg(x.atan()))
    }

    /// Angle from the X axis to the point `(x, y)`, in degrees.
    #[inline]
    pub fn atan2(y: f64, x: f64) -> Degrees {
        Degrees::new(rad2deg(y.atan2(x)))
    }

    /// Arccotangent, `atan(1 / x)`, in degrees.
    #[inline]
    pub fn acot(x: f64) -> Degrees {
        atan(1.0 / x)
    }
}
