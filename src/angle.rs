// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Angle and time-of-day normalization helpers.
//!
//! Every addition or subtraction of hour-of-day or longitude-like values in
//! this crate can cross a day or circle boundary, so the pipeline re-normalizes
//! with [`adj24`] / [`adj360`] after each such step.  Both are idempotent and
//! total over finite `f64` input.

/// Normalizes a value in hours into `[0, 24)`.
#[inline]
pub fn adj24(hours: f64) -> f64 {
    let h = hours.rem_euclid(24.0);
    // rem_euclid(-1e-18, 24.0) rounds to 24.0 exactly; fold it back.
    if h >= 24.0 {
        0.0
    } else {
        h
    }
}

/// Normalizes a value in degrees into `[0, 360)`.
#[inline]
pub fn adj360(degrees: f64) -> f64 {
    let d = degrees.rem_euclid(360.0);
    if d >= 360.0 {
        0.0
    } else {
        d
    }
}

/// Quadrant-correct arctangent of `num / den`, in degrees within `[0, 360)`.
///
/// Replicates `atan2` semantics with the legacy tie-breaking rules:
/// - zero numerator → `0`;
/// - zero denominator → `90` or `270` by the sign of the numerator;
/// - negative denominator → principal value plus `180`;
/// - negative result with non-negative denominator → plus `360`.
pub fn quadrant_atan(num: f64, den: f64) -> f64 {
    if num == 0.0 {
        return 0.0;
    }
    if den == 0.0 {
        return if num > 0.0 { 90.0 } else { 270.0 };
    }
    let deg = (num / den).atan().to_degrees();
    if den < 0.0 {
        deg + 180.0
    } else if deg < 0.0 {
        deg + 360.0
    } else {
        deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adj24_range_and_idempotence() {
        for &x in &[-50.3, -24.0, -0.0001, 0.0, 11.99, 24.0, 24.0001, 317.4] {
            let once = adj24(x);
            assert!((0.0..24.0).contains(&once), "adj24({x}) = {once}");
            assert_eq!(adj24(once), once);
        }
    }

    #[test]
    fn adj360_range_and_idempotence() {
        for &x in &[-720.5, -359.9, 0.0, 179.1, 360.0, 360.2, 9000.0] {
            let once = adj360(x);
            assert!((0.0..360.0).contains(&once), "adj360({x}) = {once}");
            assert_eq!(adj360(once), once);
        }
    }

    #[test]
    fn adj24_wraps_by_whole_days() {
        assert!((adj24(25.5) - 1.5).abs() < 1e-12);
        assert!((adj24(-1.0) - 23.0).abs() < 1e-12);
    }

    #[test]
    fn quadrant_atan_axis_rules() {
        assert_eq!(quadrant_atan(0.0, 1.0), 0.0);
        assert_eq!(quadrant_atan(0.0, -1.0), 0.0);
        assert_eq!(quadrant_atan(1.0, 0.0), 90.0);
        assert_eq!(quadrant_atan(-1.0, 0.0), 270.0);
    }

    #[test]
    fn quadrant_atan_covers_all_quadrants() {
        assert!((quadrant_atan(1.0, 1.0) - 45.0).abs() < 1e-12);
        assert!((quadrant_atan(1.0, -1.0) - 135.0).abs() < 1e-12);
        assert!((quadrant_atan(-1.0, -1.0) - 225.0).abs() < 1e-12);
        assert!((quadrant_atan(-1.0, 1.0) - 315.0).abs() < 1e-12);
    }

    #[test]
    fn quadrant_atan_agrees_with_atan2() {
        for i in 0..36 {
            let theta = f64::from(i) * 10.0 + 5.0;
            let (s, c) = theta.to_radians().sin_cos();
            let reference = s.atan2(c).to_degrees().rem_euclid(360.0);
            assert!(
                (quadrant_atan(s, c) - reference).abs() < 1e-9,
                "theta = {theta}"
            );
        }
    }
}
