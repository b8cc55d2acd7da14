// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Top-level sunrise/sunset solver.
//!
//! Chains the full pipeline for a single observer and date:
//!
//! | Stage | Module |
//! |-------|--------|
//! | calendar date → Julian Date | [`crate::julian`] |
//! | day count → ecliptic longitude (this day and the next) | [`crate::kepler`] |
//! | ecliptic → equatorial | [`crate::equatorial`] |
//! | hour angles, interpolation, refraction | [`crate::horizon`] |
//! | sidereal → civil minutes | [`crate::sidereal`] |
//!
//! # Sign convention
//!
//! Longitude and UTC offset are **west-positive**: San Francisco is at
//! longitude `+122.42` with a daylight-time offset of `+7.0`.  This is the
//! opposite of the ISO 6709 / IANA convention; use
//! [`SolarQuery::from_east_positive`] to build a query from east-positive
//! values.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use qtty::Degrees;

use crate::angle::adj24;
use crate::equatorial::{equatorial, EquatorialPosition};
use crate::error::{RiseSetResult, SolarError};
use crate::horizon::{hour_angles, interpolate, refraction_delta, HorizonCrossing};
use crate::julian::{julian_date, JulianDate};
use crate::kepler::solar_longitude;
use crate::sidereal::{local_minutes, lst_midnight};

/// One observer and one calendar date.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarQuery {
    /// Observer latitude, degrees, north-positive.
    pub latitude: f64,
    /// Observer longitude, degrees, **west-positive**.
    pub longitude: f64,
    /// Offset from UTC, hours, **west-positive** (PST is `+8.0`).
    pub utc_offset_hours: f64,
    /// Local calendar date to solve for.
    pub date: NaiveDate,
}

impl SolarQuery {
    /// Builds a query from west-positive longitude and UTC offset.
    pub fn new(latitude: f64, longitude: f64, utc_offset_hours: f64, date: NaiveDate) -> Self {
        Self {
            latitude,
            longitude,
            utc_offset_hours,
            date,
        }
    }

    /// Builds a query from the usual east-positive longitude and UTC offset
    /// (ISO 6709 signs) by negating both.
    pub fn from_east_positive(
        latitude: f64,
        longitude_east: f64,
        utc_offset_hours_east: f64,
        date: NaiveDate,
    ) -> Self {
        Self::new(latitude, -longitude_east, -utc_offset_hours_east, date)
    }
}

/// Sunrise and sunset instants in the observer's local civil time,
/// rounded to the minute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarResult {
    /// Local time of sunrise.
    pub sunrise: NaiveDateTime,
    /// Local time of sunset.
    pub sunset: NaiveDateTime,
}

/// Intermediate quantities captured while solving one query.
///
/// Returned by [`solve_sunrise_sunset_with_diagnostics`] so callers can log
/// or inspect the pipeline without the crate committing to a logging
/// framework of its own.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolarDiagnostics {
    /// Julian Date of 0h on the query date.
    pub julian_date: JulianDate,
    /// Ecliptic longitude of the sun on the query date, degrees.
    pub longitude_day0: f64,
    /// Ecliptic longitude on the following date, degrees.
    pub longitude_day1: f64,
    /// Equatorial position on the query date.
    pub position_day0: EquatorialPosition,
    /// Equatorial position on the following date.
    pub position_day1: EquatorialPosition,
    /// Local sidereal time of midnight, hours.
    pub lst_midnight: f64,
    /// Interpolated LST of the geometric rise, hours.
    pub lst_rise: f64,
    /// Interpolated LST of the geometric set, hours.
    pub lst_set: f64,
    /// Refraction/parallax correction, hours.
    pub refraction_hours: f64,
}

/// Computes sunrise and sunset for one query.
///
/// # Errors
///
/// * [`SolarError::UnsupportedEra`] for dates before 1583.
/// * [`SolarError::Circumpolar`] when the sun never crosses the horizon on
///   the query date (or the following one, which the interpolation needs).
/// * [`SolarError::ConvergenceFailure`] if the Kepler iteration diverges.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use riseset::{solve_sunrise_sunset, SolarQuery};
///
/// // San Francisco, summer solstice 2021, Pacific Daylight Time.
/// let query = SolarQuery::new(
///     37.7749,
///     122.4194,
///     7.0,
///     NaiveDate::from_ymd_opt(2021, 6, 21).unwrap(),
/// );
/// let result = solve_sunrise_sunset(&query).unwrap();
///
/// use chrono::Timelike;
/// assert!(result.sunrise.hour() < 6);
/// assert!(result.sunset.hour() >= 20);
/// ```
pub fn solve_sunrise_sunset(query: &SolarQuery) -> RiseSetResult<SolarResult> {
    solve_sunrise_sunset_with_diagnostics(query).map(|(result, _)| result)
}

/// Like [`solve_sunrise_sunset`], but also returns the pipeline's
/// intermediate quantities.
pub fn solve_sunrise_sunset_with_diagnostics(
    query: &SolarQuery,
) -> RiseSetResult<(SolarResult, SolarDiagnostics)> {
    let latitude = Degrees::new(query.latitude);

    let jd = julian_date(query.date)?;
    let day0 = jd.days_since_epoch_1980().value();

    let longitude_day0 = solar_longitude(day0)?;
    let longitude_day1 = solar_longitude(day0 + 1.0)?;
    let position_day0 = equatorial(longitude_day0);
    let position_day1 = equatorial(longitude_day1);

    let (rise0, set0) = events(position_day0, latitude)?;
    let (rise1, set1) = events(position_day1, latitude)?;

    let lstm = lst_midnight(jd, query.longitude, query.utc_offset_hours);
    let lst_rise = interpolate(rise0, rise1, lstm);
    let lst_set = interpolate(set0, set1, lstm);

    let mean_declination =
        Degrees::new((position_day0.declination.value() + position_day1.declination.value()) / 2.0);
    let refraction_hours = refraction_delta(latitude, mean_declination);

    let corrected_rise = adj24(lst_rise - refraction_hours);
    let corrected_set = adj24(lst_set + refraction_hours);

    let rise_minutes = local_minutes(corrected_rise, jd, query.utc_offset_hours, query.longitude);
    let set_minutes = local_minutes(corrected_set, jd, query.utc_offset_hours, query.longitude);

    let midnight = NaiveDateTime::new(query.date, NaiveTime::MIN);
    let result = SolarResult {
        sunrise: midnight + Duration::minutes(i64::from(rise_minutes)),
        sunset: midnight + Duration::minutes(i64::from(set_minutes)),
    };
    let diagnostics = SolarDiagnostics {
        julian_date: jd,
        longitude_day0,
        longitude_day1,
        position_day0,
        position_day1,
        lst_midnight: lstm,
        lst_rise,
        lst_set,
        refraction_hours,
    };
    Ok((result, diagnostics))
}

fn events(position: EquatorialPosition, latitude: Degrees) -> RiseSetResult<(f64, f64)> {
    match hour_angles(position, latitude) {
        HorizonCrossing::Events { rise, set } => Ok((rise, set)),
        HorizonCrossing::Circumpolar(polar) => Err(SolarError::Circumpolar(polar)),
    }
}
