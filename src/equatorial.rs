// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Ecliptic → equatorial coordinate conversion.
//!
//! Uses a frozen-epoch obliquity rather than a time-varying one; the drift
//! (≈0.47″/yr) is far below the minute resolution of the rise/set output.

use qtty::Degrees;

use crate::angle::quadrant_atan;

/// Mean obliquity of the ecliptic, degrees (frozen 1980.0 value).
const OBLIQUITY_DEG: f64 = 23.441884;

/// Sun position on the equatorial grid: right ascension in hours,
/// declination in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EquatorialPosition {
    /// Right ascension, hours in `[0, 24)`.
    pub right_ascension: f64,
    /// Declination, degrees in `[-23.45, 23.45]` for the sun.
    pub declination: Degrees,
}

/// Converts an ecliptic longitude (degrees, ecliptic latitude 0) into an
/// equatorial position.
///
/// Declination is `asin(sin ε · sin λ)`; right ascension comes from the
/// quadrant-correct arctangent of `sin λ · cos ε` over `cos λ`, divided by
/// 15 to give hours.
pub fn equatorial(ecliptic_longitude: f64) -> EquatorialPosition {
    let epsilon = OBLIQUITY_DEG.to_radians();
    let lambda = ecliptic_longitude.to_radians();

    let declination = (epsilon.sin() * lambda.sin()).asin().to_degrees();
    let ra_degrees = quadrant_atan(lambda.sin() * epsilon.cos(), lambda.cos());

    EquatorialPosition {
        right_ascension: ra_degrees / 15.0,
        declination: Degrees::new(declination),
    }
}
