//! # Constants and type definitions for SkyMap
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! aliases** used throughout the `skymap` library.
//!
//! ## Overview
//!
//! - Astronomical and geophysical constants
//! - Unit conversions (degrees ↔ radians, hours ↔ degrees, Earth radii ↔ AU)
//! - Parameters of the low-precision ephemeris (epoch offsets, sidereal rate, solver tolerance)
//! - Identity ranges used by the external renderer for selection
//!
//! These definitions are used by all main modules, from the sidereal clock to the
//! horizon projector.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Hours of right ascension → degrees
pub const DEG_PER_HOUR: f64 = 15.0;

/// Earth equatorial radius in meters (GRS1980/WGS84)
pub const EARTH_MAJOR_AXIS: f64 = 6_378_137.0;

/// Earth polar radius in meters (GRS1980/WGS84)
pub const EARTH_MINOR_AXIS: f64 = 6_356_752.3;

/// Earth radius expressed in astronomical units
pub const ERAU: f64 = (EARTH_MAJOR_AXIS / 1000.) / AU;

/// Rotation of the Earth relative to the stars, in degrees per solar hour
pub const SIDEREAL_RATE: f64 = 15.04107;

// -------------------------------------------------------------------------------------------------
// Low-precision ephemeris parameters
// -------------------------------------------------------------------------------------------------

/// Constant term of the day-number formula (day 0 is J2000.0, 2000-01-01 12:00 UT)
pub const DAY_NUMBER_OFFSET: f64 = 730_531.5;

/// Offset between the day number and the epoch of the orbital element tables
/// (2000 January 0.0 UT).
pub const ELEMENTS_EPOCH_SHIFT: f64 = 1.5;

/// Convergence threshold of the Kepler solver, in radians
pub const KEPLER_TOLERANCE: f64 = 0.0005;

/// Hard cap on Newton iterations for the Kepler solver
pub const KEPLER_MAX_ITERATIONS: usize = 50;

/// Standard altitude of the Sun's upper limb at rise/set (refraction + semi-diameter), degrees
pub const SUN_HORIZON_ALTITUDE: Degree = -0.833;

/// Base altitude used for bodies whose parallax is subtracted, degrees (29′)
pub const PARALLAX_HORIZON_ALTITUDE: Degree = 29.0 / 60.0;

// -------------------------------------------------------------------------------------------------
// Identities exposed to the renderer
// -------------------------------------------------------------------------------------------------

/// First identity of the Messier range; "M1" maps to this value
pub const MESSIER_ID_OFFSET: usize = 10;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Time of day or duration in hours
pub type Hour = f64;
/// Continuous day count since J2000.0 (see [`crate::time::day_number`])
pub type DayNumber = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
