// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calculation methods, madhabs and timing names.
//!
//! A [`CalculationMethod`] carries the two twilight parameters that differ
//! between authorities: the Fajr and Isha [`MethodParam`]s. Methods are plain
//! data; [`MethodRegistry`] is an explicit, immutable lookup table that
//! callers build once and pass around.
//!
//! | id | Fajr | Isha |
//! |----|------|------|
//! | `MWL` | 15° | 15° |
//! | `ISNA` | 15° | 15° |
//! | `Egypt` | 19.5° | 17.5° |
//! | `Karachi` | 18° | 18° |
//! | `Makkah` | 18.5° | 90 min |
//! | `Tehran` | 17.7° | 14° |
//! | `Gulf` | 19.5° | 90 min |
//! | `Kuwait` | 18° | 17.5° |
//! | `Qatar` | 18° | 90 min |
//! | `Singapore` | 20° | 18° |
//! | `Turkey` | 18° | 17° |

use qtty::Degrees;
use std::fmt;
use std::str::FromStr;

use crate::duration::Duration;
use crate::error::{Error, Result};

// ═══════════════════════════════════════════════════════════════════════════
// MethodParam
// ═══════════════════════════════════════════════════════════════════════════

/// How a twilight timing is found.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MethodParam {
    /// Depression of the Sun's centre below the horizon.
    Angle(Degrees),
    /// Fixed interval from the horizon event: after Maghrib for Isha,
    /// before Sunrise for Fajr.
    Interval(Duration),
}

impl MethodParam {
    #[inline]
    pub const fn degrees(angle: f64) -> Self {
        Self::Angle(Degrees::new(angle))
    }

    #[inline]
    pub fn minutes(minutes: f64) -> Self {
        Self::Interval(Duration::from_minutes(minutes))
    }
}

impl fmt::Display for MethodParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Angle(angle) => write!(f, "{}°", angle.value()),
            Self::Interval(interval) => write!(f, "{} min", interval.minutes()),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CalculationMethod
// ═══════════════════════════════════════════════════════════════════════════

/// A named set of Fajr/Isha solving parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationMethod {
    pub id: String,
    pub full_name: String,
    pub fajr: MethodParam,
    pub isha: MethodParam,
}

impl CalculationMethod {
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        fajr: MethodParam,
        isha: MethodParam,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            fajr,
            isha,
        }
    }

    /// Muslim World League, the default method: 15° for both Fajr and Isha.
    pub fn mwl() -> Self {
        Self::new(
            "MWL",
            "Muslim World League",
            MethodParam::degrees(15.0),
            MethodParam::degrees(15.0),
        )
    }

    /// Islamic Society of North America.
    pub fn isna() -> Self {
        Self::new(
            "ISNA",
            "Islamic Society of North America",
            MethodParam::degrees(15.0),
            MethodParam::degrees(15.0),
        )
    }

    /// Egyptian General Authority of Survey.
    pub fn egypt() -> Self {
        Self::new(
            "Egypt",
            "Egyptian General Authority of Survey",
            MethodParam::degrees(19.5),
            MethodParam::degrees(17.5),
        )
    }

    pub fn karachi() -> Self {
        Self::new(
            "Karachi",
            "University of Islamic Sciences, Karachi",
            MethodParam::degrees(18.0),
            MethodParam::degrees(18.0),
        )
    }

    /// Umm Al-Qura. Isha is a fixed 90 minutes after Maghrib.
    pub fn makkah() -> Self {
        Self::new(
            "Makkah",
            "Umm Al-Qura University, Makkah",
            MethodParam::degrees(18.5),
            MethodParam::minutes(90.0),
        )
    }

    pub fn tehran() -> Self {
        Self::new(
            "Tehran",
            "Institute of Geophysics, University of Tehran",
            MethodParam::degrees(17.7),
            MethodParam::degrees(14.0),
        )
    }

    pub fn gulf() -> Self {
        Self::new(
            "Gulf",
            "Gulf Region",
            MethodParam::degrees(19.5),
            MethodParam::minutes(90.0),
        )
    }

    pub fn kuwait() -> Self {
        Self::new(
            "Kuwait",
            "Kuwait",
            MethodParam::degrees(18.0),
            MethodParam::degrees(17.5),
        )
    }

    pub fn qatar() -> Self {
        Self::new(
            "Qatar",
            "Qatar",
            MethodParam::degrees(18.0),
            MethodParam::minutes(90.0),
        )
    }

    pub fn singapore() -> Self {
        Self::new(
            "Singapore",
            "Majlis Ugama Islam Singapura",
            MethodParam::degrees(20.0),
            MethodParam::degrees(18.0),
        )
    }

    pub fn turkey() -> Self {
        Self::new(
            "Turkey",
            "Diyanet İşleri Başkanlığı",
            MethodParam::degrees(18.0),
            MethodParam::degrees(17.0),
        )
    }
}

impl Default for CalculationMethod {
    fn default() -> Self {
        Self::mwl()
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): fajr {}, isha {}",
            self.id, self.full_name, self.fajr, self.isha
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// MethodRegistry
// ═══════════════════════════════════════════════════════════════════════════

/// Immutable lookup table from method id to [`CalculationMethod`].
#[derive(Debug, Clone, PartialEq)]
pub struct MethodRegistry {
    methods: Vec<CalculationMethod>,
}

impl MethodRegistry {
    /// Table with every built-in method.
    pub fn builtin() -> Self {
        Self {
            methods: vec![
                CalculationMethod::mwl(),
                CalculationMethod::isna(),
                CalculationMethod::egypt(),
                CalculationMethod::karachi(),
                CalculationMethod::makkah(),
                CalculationMethod::tehran(),
                CalculationMethod::gulf(),
                CalculationMethod::kuwait(),
                CalculationMethod::qatar(),
                CalculationMethod::singapore(),
                CalculationMethod::turkey(),
            ],
        }
    }

    /// A copy of this table with `method` added, replacing any method with
    /// the same id.
    pub fn with(mut self, method: CalculationMethod) -> Self {
        match self.methods.iter_mut().find(|m| m.id == method.id) {
            Some(existing) => *existing = method,
            None => self.methods.push(method),
        }
        self
    }

    /// Look up a method by id (case-sensitive).
    pub fn get(&self, id: &str) -> Result<&CalculationMethod> {
        self.methods
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| Error::UnknownMethod(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.methods.iter().any(|m| m.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalculationMethod> {
        self.methods.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(|m| m.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Madhab
// ═══════════════════════════════════════════════════════════════════════════

/// School of jurisprudence, selecting the Asr shadow threshold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Madhab {
    /// Asr when a shadow equals the object's length (plus its noon shadow).
    #[default]
    Shafi,
    /// Asr when a shadow equals twice the object's length.
    Hanafi,
}

impl Madhab {
    /// Shadow length, in object lengths, that marks the start of Asr.
    #[inline]
    pub const fn shadow_multiplier(self) -> f64 {
        match self {
            Madhab::Shafi => 1.0,
            Madhab::Hanafi => 2.0,
        }
    }

    /// The conventional numeric selector (1 = Shafi, 2 = Hanafi).
    #[inline]
    pub const fn code(self) -> i64 {
        match self {
            Madhab::Shafi => 1,
            Madhab::Hanafi => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Madhab::Shafi => "shafi",
            Madhab::Hanafi => "hanafi",
        }
    }
}

impl TryFrom<i64> for Madhab {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self> {
        match code {
            1 => Ok(Madhab::Shafi),
            2 => Ok(Madhab::Hanafi),
            other => Err(Error::InvalidMadhab(other.to_string())),
        }
    }
}

impl FromStr for Madhab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shafi" | "1" => Ok(Madhab::Shafi),
            "hanafi" | "2" => Ok(Madhab::Hanafi),
            _ => Err(Error::InvalidMadhab(s.to_string())),
        }
    }
}

impl fmt::Display for Madhab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TimingName
// ═══════════════════════════════════════════════════════════════════════════

/// The closed set of daily timings, in chronological order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimingName {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
    /// Islamic midnight: halfway between Maghrib and the next Sunrise.
    Midnight,
}

impl TimingName {
    /// Every timing, in chronological order.
    pub const ALL: [TimingName; 7] = [
        TimingName::Fajr,
        TimingName::Sunrise,
        TimingName::Dhuhr,
        TimingName::Asr,
        TimingName::Maghrib,
        TimingName::Isha,
        TimingName::Midnight,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TimingName::Fajr => "fajr",
            TimingName::Sunrise => "sunrise",
            TimingName::Dhuhr => "dhuhr",
            TimingName::Asr => "asr",
            TimingName::Maghrib => "maghrib",
            TimingName::Isha => "isha",
            TimingName::Midnight => "midnight",
        }
    }
}

impl FromStr for TimingName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TimingName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownTiming(s.to_string()))
    }
}

impl fmt::Display for TimingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
