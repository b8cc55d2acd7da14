// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Apparent ecliptic longitude of the sun.
//!
//! Low-precision solution built on the 1980.0 orbital elements: mean anomaly
//! from the day count, Kepler's equation solved iteratively for the eccentric
//! anomaly, the half-angle tangent relation for the true anomaly, and the
//! perihelion longitude added back in.  Good to a few arcminutes, which is
//! ample for minute-resolution rise/set times.

use crate::angle::adj360;
use crate::error::{RiseSetResult, SolarError};

/// Mean tropical year, in days.
const TROPICAL_YEAR_DAYS: f64 = 365.2422;

/// Sun's mean ecliptic longitude at epoch 1980 January 0.0, degrees.
const MEAN_LONGITUDE_1980: f64 = 278.833540;

/// Ecliptic longitude of perihelion at epoch 1980.0, degrees.
const PERIHELION_LONGITUDE: f64 = 282.596403;

/// Eccentricity of the Earth–Sun orbit at epoch 1980.0.
const ECCENTRICITY: f64 = 0.016718;

/// Frozen √((1 + e)/(1 − e)) for the half-angle tangent relation.
const HALF_ANGLE_SCALE: f64 = 1.016_860_1;

/// Residual threshold for the Kepler iteration, radians.
const KEPLER_TOLERANCE: f64 = 1e-7;

/// Defensive cap on Kepler iterations; realistic inputs converge in
/// single-digit steps.
const KEPLER_MAX_ITERATIONS: usize = 100;

/// Apparent ecliptic longitude of the sun, in degrees within `[0, 360)`,
/// for a day count relative to the 1980 January 0.0 epoch.
///
/// # Errors
///
/// [`SolarError::ConvergenceFailure`] if the Kepler iteration exceeds its
/// cap — a defensive-only case for this eccentricity.
pub fn solar_longitude(days_since_epoch: f64) -> RiseSetResult<f64> {
    let mean_motion = adj360(360.0 / TROPICAL_YEAR_DAYS * days_since_epoch);
    let mean_anomaly = adj360(mean_motion + MEAN_LONGITUDE_1980 - PERIHELION_LONGITUDE);

    let eccentric = eccentric_anomaly(mean_anomaly.to_radians())?;
    let true_anomaly = 2.0 * (HALF_ANGLE_SCALE * (eccentric / 2.0).tan()).atan();

    Ok(adj360(true_anomaly.to_degrees() + PERIHELION_LONGITUDE))
}

/// Solves Kepler's equation `E − e·sin E = M` for the eccentric anomaly.
///
/// Fixed-point step `E ← E − (E − e·sin E − M)/(1 − e·cos E)`, seeded with
/// the mean anomaly.  All angles in radians.
fn eccentric_anomaly(mean_anomaly: f64) -> RiseSetResult<f64> {
    let mut e = mean_anomaly;
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let residual = e - ECCENTRICITY * e.sin() - mean_anomaly;
        if residual.abs() < KEPLER_TOLERANCE {
            return Ok(e);
        }
        e -= residual / (1.0 - ECCENTRICITY * e.cos());
    }
    Err(SolarError::ConvergenceFailure {
        iterations: KEPLER_MAX_ITERATIONS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kepler_equation_holds_at_solution() {
        for &m_deg in &[0.01_f64, 37.5, 90.0, 166.8, 201.3, 359.2] {
            let m = m_deg.to_radians();
            let e = eccentric_anomaly(m).unwrap();
            assert!(
                (e - ECCENTRICITY * e.sin() - m).abs() < KEPLER_TOLERANCE,
                "residual too large for M = {m_deg}°"
            );
        }
    }

    #[test]
    fn longitude_is_normalized() {
        for day in -2000..2000 {
            let lambda = solar_longitude(f64::from(day) * 9.25).unwrap();
            assert!((0.0..360.0).contains(&lambda), "day {day}: {lambda}");
        }
    }

    #[test]
    fn near_ninety_degrees_at_summer_solstice() {
        // 2021-06-21 is 15 148 days past the 1980.0 epoch.
        let lambda = solar_longitude(15_148.0).unwrap();
        assert!((lambda - 90.0).abs() < 0.5, "λ = {lambda}");
    }

    #[test]
    fn near_zero_at_vernal_equinox() {
        // 2021-03-20 is 15 055 days past the 1980.0 epoch.
        let lambda = solar_longitude(15_055.0).unwrap();
        let distance = lambda.min(360.0 - lambda);
        assert!(distance < 1.5, "λ = {lambda}");
    }

    #[test]
    fn advances_roughly_one_degree_per_day() {
        let a = solar_longitude(10_000.0).unwrap();
        let b = solar_longitude(10_001.0).unwrap();
        let step = adj360(b - a);
        assert!((0.9..1.1).contains(&step), "step = {step}");
    }
}
