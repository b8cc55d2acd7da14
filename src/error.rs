// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for the rise/set pipeline.
//!
//! All three variants are returned as typed errors from the top-level solver;
//! no stage recovers silently from another stage's degenerate output.  A
//! caller computing a multi-day series should treat each day's error
//! independently — one circumpolar day does not invalidate its neighbours.

use thiserror::Error;

/// Whether the sun stays above or below the horizon on a circumpolar date.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Polar {
    /// Continuous daylight: the sun never sets.
    Day,
    /// Continuous darkness: the sun never rises.
    Night,
}

impl Polar {
    fn describe(&self) -> &'static str {
        match self {
            Polar::Day => "daylight",
            Polar::Night => "darkness",
        }
    }
}

/// Errors produced by the sunrise/sunset pipeline.
#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum SolarError {
    /// The requested year precedes 1583, where the Gregorian Julian-date
    /// formula is invalid.  Fatal to that single query.
    #[error("unsupported era: year {year} precedes 1583")]
    UnsupportedEra {
        /// The rejected year.
        year: i32,
    },

    /// The latitude/declination combination yields no geometric rise or set
    /// on that date (polar day or polar night).
    #[error("circumpolar date: continuous {}", .0.describe())]
    Circumpolar(Polar),

    /// The Kepler-equation iteration exceeded its defensive cap.  Does not
    /// occur for physically valid inputs; indicates a logic error upstream.
    #[error("Kepler iteration failed to converge after {iterations} steps")]
    ConvergenceFailure {
        /// Number of iterations performed before giving up.
        iterations: usize,
    },
}

/// Result alias for pipeline operations.
pub type RiseSetResult<T> = Result<T, SolarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_strings_name_the_condition() {
        let era = SolarError::UnsupportedEra { year: 1250 };
        assert_eq!(era.to_string(), "unsupported era: year 1250 precedes 1583");

        let night = SolarError::Circumpolar(Polar::Night);
        assert!(night.to_string().contains("darkness"));
        let day = SolarError::Circumpolar(Polar::Day);
        assert!(day.to_string().contains("daylight"));

        let diverged = SolarError::ConvergenceFailure { iterations: 100 };
        assert!(diverged.to_string().contains("100"));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SolarError>();
    }
}
