// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Loosely-typed engine configuration.
//!
//! [`SalahConfig`] mirrors what a client sends over the wire: a method by id,
//! a madhab as either its numeric code or its name. With the `serde` feature
//! it deserializes from camelCase JSON:
//!
//! ```json
//! { "lat": 43.8975, "lng": -78.9429, "timeZone": "America/Toronto",
//!   "madhab": 2, "method": "ISNA" }
//! ```
//!
//! [`SalahConfig::into_options`] validates every field and resolves the
//! method against a [`MethodRegistry`].

#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::method::{Madhab, MethodRegistry};
use crate::salah::{SalahOptions, MAX_LATITUDE};

/// A madhab given as `1`/`2` or `"shafi"`/`"hanafi"`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum MadhabSelector {
    Code(i64),
    Name(String),
}

impl MadhabSelector {
    pub fn resolve(&self) -> Result<Madhab> {
        match self {
            MadhabSelector::Code(code) => Madhab::try_from(*code),
            MadhabSelector::Name(name) => name.parse(),
        }
    }
}

impl From<Madhab> for MadhabSelector {
    fn from(madhab: Madhab) -> Self {
        MadhabSelector::Code(madhab.code())
    }
}

/// Unvalidated engine configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SalahConfig {
    pub lat: f64,
    pub lng: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub time_zone: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub madhab: Option<MadhabSelector>,
    /// Method id, looked up in the registry.
    #[cfg_attr(feature = "serde", serde(default))]
    pub method: Option<String>,
}

impl SalahConfig {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            time_zone: None,
            madhab: None,
            method: None,
        }
    }

    /// Validate and resolve into engine options.
    ///
    /// # Errors
    /// * [`Error::UnsupportedLatitude`] outside `[-60, 60]`
    /// * [`Error::InvalidLongitude`] outside `[-180, 180]`
    /// * [`Error::InvalidMadhab`] for anything but Shafi/Hanafi
    /// * [`Error::UnknownMethod`] for an id missing from `registry`
    ///
    /// The zone id is checked later, by [`crate::Salah::new`].
    pub fn into_options(self, registry: &MethodRegistry) -> Result<SalahOptions> {
        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&self.lat) {
            return Err(Error::UnsupportedLatitude(self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(Error::InvalidLongitude(self.lng));
        }

        let mut options = SalahOptions::new(self.lat, self.lng);
        options.time_zone = self.time_zone;
        options.madhab = self.madhab.as_ref().map(MadhabSelector::resolve).transpose()?;
        options.method = self
            .method
            .as_deref()
            .map(|id| registry.get(id).cloned())
            .transpose()?;
        Ok(options)
    }
}
