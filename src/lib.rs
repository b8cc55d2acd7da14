// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sunrise/Sunset Module
//!
//! Low-precision solar ephemeris: local sunrise and sunset times, rounded to
//! the minute, from an observer's latitude, longitude, date and UTC offset.
//!
//! # Core types
//!
//! - [`SolarQuery`] — observer position, UTC offset and date.
//! - [`SolarResult`] — local sunrise and sunset instants.
//! - [`SolarDiagnostics`] — intermediate pipeline quantities.
//! - [`JulianDate`] — continuous day count backing the time arithmetic.
//! - [`SolarError`] / [`Polar`] — typed failure modes.
//!
//! # Pipeline
//!
//! [`solve_sunrise_sunset`] chains five stages:
//!
//! | Stage | Computes |
//! |-------|----------|
//! | [`julian`] | Julian Date of 0h on the query date |
//! | [`kepler`] | ecliptic longitude of the sun (query date and the next) |
//! | [`equatorial`] | right ascension and declination |
//! | [`horizon`] | rise/set hour angles, interpolation, refraction |
//! | [`sidereal`] | GMST and the sidereal → civil conversion |
//!
//! # Sign convention
//!
//! Longitude and UTC offset are **west-positive** throughout, the opposite
//! of the ISO 6709 signs.  [`SolarQuery::from_east_positive`] converts.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use riseset::{solve_sunrise_sunset, SolarQuery};
//!
//! let query = SolarQuery::new(
//!     37.7749,   // latitude, north-positive
//!     122.4194,  // longitude, west-positive
//!     7.0,       // UTC offset, west-positive (PDT)
//!     NaiveDate::from_ymd_opt(2021, 6, 21).unwrap(),
//! );
//! let day = solve_sunrise_sunset(&query).unwrap();
//! println!("sunrise {} / sunset {}", day.sunrise.time(), day.sunset.time());
//! ```

pub(crate) mod angle;
pub mod equatorial;
pub mod error;
pub mod horizon;
pub mod julian;
pub mod kepler;
pub mod sidereal;
pub mod solver;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use equatorial::{equatorial, EquatorialPosition};
pub use error::{Polar, RiseSetResult, SolarError};
pub use horizon::HorizonCrossing;
pub use julian::{julian_date, JulianDate, FIRST_SUPPORTED_YEAR};
pub use kepler::solar_longitude;
pub use sidereal::gmst;
pub use solver::{
    solve_sunrise_sunset, solve_sunrise_sunset_with_diagnostics, SolarDiagnostics, SolarQuery,
    SolarResult,
};
