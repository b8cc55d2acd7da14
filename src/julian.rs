// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date instant and calendar conversion.
//!
//! [`JulianDate`] stores a continuous day count as a [`Days`] quantity; the
//! struct is `Copy` and layout-identical to a single `f64`.  The calendar
//! converter [`julian_date`] accepts proleptic Gregorian dates from 1583
//! onward — the polynomial formula it uses predates the Gregorian reform and
//! is meaningless for earlier years, so those are rejected with
//! [`SolarError::UnsupportedEra`] instead of the legacy silent zero.

use chrono::{Datelike, NaiveDate};
use qtty::Days;
use std::ops::{Add, Sub};

use crate::error::SolarError;

/// First year the Gregorian calendar formula is considered valid.
pub const FIRST_SUPPORTED_YEAR: i32 = 1583;

/// A point on the Julian Date axis (days since the Julian Period origin).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDate(Days);

impl JulianDate {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// 1980 January 0.0 (JD 2 444 238.5) — the epoch of the orbital elements
    /// used by the solar-longitude solver.
    pub const EPOCH_1980: Self = Self::new(2_444_238.5);

    /// Create from a raw Julian Day number.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(Days::new(value))
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self(days)
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.0
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0.value()
    }

    /// Days elapsed since the 1980 orbital-element epoch.
    #[inline]
    pub fn days_since_epoch_1980(&self) -> Days {
        self.0 - Self::EPOCH_1980.quantity()
    }
}

impl std::fmt::Display for JulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {}", self.0)
    }
}

impl Add<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl Sub<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl Sub for JulianDate {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

/// Julian Date of 0h UT on the given calendar date.
///
/// January and February are treated as months 13 and 14 of the previous year
/// before the polynomial formula is applied, with the Gregorian century
/// correction `B = 2 − A + ⌊A/4⌋`.
///
/// # Errors
///
/// [`SolarError::UnsupportedEra`] for dates before 1583.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use riseset::julian_date;
///
/// let jd = julian_date(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()).unwrap();
/// assert_eq!(jd.value(), 2_451_544.5);
/// ```
pub fn julian_date(date: NaiveDate) -> Result<JulianDate, SolarError> {
    if date.year() < FIRST_SUPPORTED_YEAR {
        return Err(SolarError::UnsupportedEra { year: date.year() });
    }

    let mut y = f64::from(date.year());
    let mut m = f64::from(date.month());
    let d = f64::from(date.day());
    if date.month() <= 2 {
        y -= 1.0;
        m += 12.0;
    }

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    let jd = (365.25 * y).floor() + (30.6001 * (m + 1.0)).floor() + d + 1_720_994.5 + b;
    Ok(JulianDate::new(jd))
}
