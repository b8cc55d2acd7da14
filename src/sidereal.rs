// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sidereal time: GMST from a Julian Date, and the conversion of a local
//! sidereal event time back to civil minutes.
//!
//! The GMST polynomial works in seconds and splits the Julian-century
//! argument into its whole and fractional parts.  The large linear
//! coefficient `8 640 184.812 866 s/century` is `8 640 000 s` (exactly
//! 100 days, which vanishes modulo 24 h) plus `184.812 866 s`; applying only
//! the small remainder to the whole-century part keeps every intermediate
//! well inside `f64` precision without changing the folded result.

use crate::angle::adj24;
use crate::julian::JulianDate;

/// Ratio of a mean solar day to a mean sidereal day.
const SOLAR_PER_SIDEREAL: f64 = 0.997_27;

/// Ratio of a mean sidereal day to a mean solar day.
const SIDEREAL_PER_SOLAR: f64 = 1.002_737_909;

/// GMST polynomial coefficients, seconds per power of Julian centuries.
const GMST_S0: f64 = 24_110.548_41;
const GMST_S1_WHOLE: f64 = 184.812_866;
const GMST_S1_FRACT: f64 = 8_640_184.812_866;
const GMST_S2: f64 = 0.093_104;
const GMST_S3: f64 = -0.000_006_2;

/// Greenwich Mean Sidereal Time, in hours within `[0, 24)`, at `ut_hours`
/// past 0h UT on the day whose midnight Julian Date is `jd`.
pub fn gmst(jd: JulianDate, ut_hours: f64) -> f64 {
    let t = (jd - JulianDate::J2000).value() / 36_525.0;
    let t_whole = t.trunc();
    let t_fract = t - t_whole;

    let seconds = GMST_S0
        + GMST_S1_WHOLE * t_whole
        + GMST_S1_FRACT * t_fract
        + GMST_S2 * t * t
        + GMST_S3 * t * t * t
        + ut_hours * SIDEREAL_PER_SOLAR * 3_600.0;

    adj24(seconds / 3_600.0)
}

/// Local sidereal time of midnight for a west-positive longitude, hours.
pub fn lst_midnight(jd: JulianDate, longitude: f64, utc_offset_hours: f64) -> f64 {
    adj24(gmst(jd, utc_offset_hours) - longitude / 15.0)
}

/// Converts a local sidereal event time into minutes past local midnight.
///
/// The LST is moved back to the Greenwich meridian, referenced against the
/// day's sidereal time at 0h UT, scaled to solar hours, and shifted by the
/// (west-positive) UTC offset.  The result is rounded to the nearest minute.
pub fn local_minutes(lst: f64, jd: JulianDate, utc_offset_hours: f64, longitude: f64) -> i32 {
    let gst = adj24(lst + longitude / 15.0);
    let ut = adj24(gst - gmst(jd, 0.0)) * SOLAR_PER_SIDEREAL;
    let local = adj24(ut - utc_offset_hours);
    (local * 60.0).round() as i32
}
