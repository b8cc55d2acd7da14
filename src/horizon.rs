// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Geometric rise/set hour angles, day-to-day interpolation, and the
//! refraction/parallax time correction.
//!
//! The hour-angle stage reports a circumpolar date as an explicit
//! [`HorizonCrossing::Circumpolar`] outcome.  The historical codebase this
//! algorithm descends from returned `0.0` hours instead, which aliases to
//! local midnight and is indistinguishable from a real rising time.

use qtty::Degrees;

use crate::angle::adj24;
use crate::equatorial::EquatorialPosition;
use crate::error::Polar;

/// Combined atmospheric refraction and solar parallax at the horizon,
/// degrees.
const REFRACTION_PARALLAX_DEG: f64 = 0.835_608;

/// Sidereal hours per solar day, used as the interpolation denominator.
const SIDEREAL_HOURS_PER_DAY: f64 = 24.07;

/// Outcome of the rise/set hour-angle computation for one date.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum HorizonCrossing {
    /// The sun crosses the horizon: local sidereal times of the geometric
    /// rise and set, hours in `[0, 24)`.
    Events {
        /// LST of the geometric rise.
        rise: f64,
        /// LST of the geometric set.
        set: f64,
    },
    /// No geometric rise or set on this date.
    Circumpolar(Polar),
}

/// Local sidereal rise/set times for a sun position seen from `latitude`
/// (degrees, north-positive).
///
/// `cos H = −tan(lat)·tan(dec)`; a value outside `[−1, 1]` means the sun
/// never crosses the horizon that day.
pub fn hour_angles(position: EquatorialPosition, latitude: Degrees) -> HorizonCrossing {
    let lat = latitude.value().to_radians();
    let dec = position.declination.value().to_radians();

    let cos_h = -lat.tan() * dec.tan();
    if cos_h > 1.0 {
        return HorizonCrossing::Circumpolar(Polar::Night);
    }
    if cos_h < -1.0 {
        return HorizonCrossing::Circumpolar(Polar::Day);
    }

    let hour_angle = cos_h.acos().to_degrees() / 15.0;
    HorizonCrossing::Events {
        rise: adj24(position.right_ascension - hour_angle),
        set: adj24(position.right_ascension + hour_angle),
    }
}

/// Interpolates between the sidereal event times of two consecutive days.
///
/// The weight is the fraction of a (sidereal-corrected) day elapsed between
/// local midnight and the day-0 event.  When the two times straddle a 24 h
/// wrap (`|day1 − day0| > 1`), day 1 is unwrapped by a full turn first.
pub fn interpolate(day0: f64, day1: f64, lst_midnight: f64) -> f64 {
    let hours_since_midnight = adj24(day0 - lst_midnight);
    let ratio = hours_since_midnight / SIDEREAL_HOURS_PER_DAY;

    let mut next = day1;
    if (next - day0).abs() > 1.0 {
        next += 24.0;
    }

    adj24((1.0 - ratio) * day0 + ratio * next)
}

/// Time correction, in hours, for refraction and parallax at the horizon.
///
/// Subtract from the interpolated rise and add to the interpolated set: the
/// bent light path makes the sun appear to rise earlier and set later than
/// the geometric event.  Trig arguments are clamped to `[−1, 1]` so
/// near-polar geometries degrade instead of producing NaN.
pub fn refraction_delta(latitude: Degrees, mean_declination: Degrees) -> f64 {
    let lat = latitude.value().to_radians();
    let dec = mean_declination.value().to_radians();

    let tri = unit(lat.sin() / dec.cos()).acos();
    let y = unit(REFRACTION_PARALLAX_DEG.to_radians().sin() / tri.sin()).asin();

    240.0 * y.to_degrees() / (dec.cos() * 3600.0)
}

#[inline]
fn unit(v: f64) -> f64 {
    v.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equatorial::equatorial;

    fn deg(v: f64) -> Degrees {
        Degrees::new(v)
    }

    #[test]
    fn equator_day_is_twelve_sidereal_hours() {
        // Declination 0 → hour angle 90° → 6 h either side of the RA.
        let pos = equatorial(0.0);
        match hour_angles(pos, deg(35.0)) {
            HorizonCrossing::Events { rise, set } => {
                assert!((adj24(set - rise) - 12.0).abs() < 1e-9);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn polar_night_at_high_north_latitude_in_winter() {
        let pos = equatorial(270.0); // winter solstice, dec ≈ −23.44°
        assert_eq!(
            hour_angles(pos, deg(70.0)),
            HorizonCrossing::Circumpolar(Polar::Night)
        );
    }

    #[test]
    fn polar_day_at_high_north_latitude_in_summer() {
        let pos = equatorial(90.0); // summer solstice, dec ≈ +23.44°
        assert_eq!(
            hour_angles(pos, deg(70.0)),
            HorizonCrossing::Circumpolar(Polar::Day)
        );
    }

    #[test]
    fn southern_hemisphere_mirrors_the_seasons() {
        let winter_north = equatorial(270.0);
        assert_eq!(
            hour_angles(winter_north, deg(-70.0)),
            HorizonCrossing::Circumpolar(Polar::Day)
        );
    }

    #[test]
    fn tropics_always_have_events() {
        for i in 0..360 {
            let pos = equatorial(f64::from(i));
            assert!(
                matches!(hour_angles(pos, deg(10.0)), HorizonCrossing::Events { .. }),
                "λ = {i}"
            );
        }
    }

    #[test]
    fn interpolation_is_identity_for_equal_days() {
        for &t in &[0.3_f64, 5.9, 13.37, 23.2] {
            let result = interpolate(t, t, 17.8);
            assert!((result - t).abs() < 1e-9, "t = {t}");
        }
    }

    #[test]
    fn interpolation_stays_between_nearby_days() {
        let result = interpolate(10.0, 10.5, 4.0);
        assert!((10.0..=10.5).contains(&result), "result = {result}");
    }

    #[test]
    fn interpolation_unwraps_midnight_crossing() {
        // Event drifts from 23.95 h to 0.05 h: no 24 h jump in the output.
        let result = interpolate(23.95, 0.05, 18.0);
        assert!(
            result >= 23.95 || result < 0.1,
            "wraparound mishandled: {result}"
        );
    }

    #[test]
    fn refraction_delta_at_the_equator() {
        // tri = 90°, so the delta collapses to 240·x/3600 hours ≈ 3.34 min.
        let dt = refraction_delta(deg(0.0), deg(0.0));
        assert!((dt - 240.0 * REFRACTION_PARALLAX_DEG / 3600.0).abs() < 1e-9);
    }

    #[test]
    fn refraction_delta_grows_with_latitude() {
        let low = refraction_delta(deg(10.0), deg(0.0));
        let mid = refraction_delta(deg(45.0), deg(0.0));
        let high = refraction_delta(deg(65.0), deg(0.0));
        assert!(low < mid && mid < high);
        // A few minutes at mid-latitudes.
        assert!(mid > 0.05 && mid < 0.15, "mid = {mid}");
    }
}
