//! # Ephemerides
//!
//! Visual attributes of a solved body: phase, elongation, visual magnitude and apparent
//! diameter, all derived from the Sun–Earth–body triangle.
//!
//! ## Overview
//!
//! - [`sun_ephemeris`]: fixed sentinel values for the Sun
//! - [`planet_ephemeris`]: law-of-cosines geometry and the per-planet magnitude models,
//!   including the ring term of Saturn
//! - [`moon_ephemeris`]: elongation from ecliptic longitudes, lunar magnitude model
//!
//! The `acos`/`asin` arguments are clamped to [−1, 1] so that rounding never produces NaN.
use crate::bodies::moon::MoonPosition;
use crate::bodies::sun::SunPosition;
use crate::bodies::Position;
use crate::constants::{ArcSec, DayNumber, Radian, RADEG};
use crate::orbital_elements::Body;

/// Magnitude given to the Sun
pub const SUN_MAGNITUDE: f64 = -23.0;

/// Phase given to the Sun (out of the [0, 1] range on purpose: the Sun has no phase cycle)
pub const SUN_PHASE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ephemeris {
    /// Visual magnitude
    pub magnitude: f64,
    /// Illuminated fraction of the disk, in [0, 1] (see [`SUN_PHASE`])
    pub phase: f64,
    /// Phase angle Sun–body–Earth
    pub phase_angle: Radian,
    /// Angular distance from the Sun, seen from the Earth
    pub elongation: Radian,
    /// Apparent diameter, arcseconds
    pub apparent_diameter: ArcSec,
}

/// `acos` with its argument clamped to [−1, 1].
pub fn safe_acos(x: f64) -> Radian {
    x.clamp(-1.0, 1.0).acos()
}

/// `asin` with its argument clamped to [−1, 1].
pub fn safe_asin(x: f64) -> Radian {
    x.clamp(-1.0, 1.0).asin()
}

/// Illuminated fraction for a phase angle.
pub fn phase(phase_angle: Radian) -> f64 {
    (1.0 + phase_angle.cos()) / 2.0
}

/// Sentinel ephemeris of the Sun.
///
/// The apparent diameter is 1919.26″ at 1 AU.
pub fn sun_ephemeris(sun: &SunPosition) -> Ephemeris {
    Ephemeris {
        magnitude: SUN_MAGNITUDE,
        phase: SUN_PHASE,
        phase_angle: 0.0,
        elongation: 0.0,
        apparent_diameter: 1919.26 / sun.distance(),
    }
}

/// Magnitude model of a planet: `(C₀, C_φ, apparent diameter at 1 AU in arcsec)`.
fn magnitude_model(body: Body) -> (f64, f64, ArcSec) {
    match body {
        Body::Mercury => (-0.36, 0.027, 6.74),
        Body::Venus => (-4.34, 0.013, 16.92),
        Body::Mars => (-1.51, 0.016, 9.36),
        Body::Jupiter => (-9.25, 0.014, 196.94),
        Body::Saturn => (-9.0, 0.044, 165.6),
        Body::Uranus => (-7.15, 0.001, 65.8),
        Body::Neptune => (-6.90, 0.001, 62.2),
        // The Sun and the Moon have their own models; the values are only a fallback.
        Body::Sun | Body::Moon => (0.0, 0.0, 0.0),
    }
}

/// Ring tilt B of Saturn seen from the Earth, radians.
///
/// ```text
/// sin B = sin β·cos ir − cos β·sin ir·sin(λ − Nr)
/// ```
///
/// The ring node `Nr` and inclination `ir` are ecliptic angles, so `λ`, `β` are Saturn's
/// geocentric ecliptic longitude and latitude, not its right ascension and declination.
///
/// Arguments
/// ---------
/// * `position`: Saturn's geocentric position (ecliptic longitude/latitude are used)
/// * `d`: day number counted from 2000 January 0.0 UT
pub fn saturn_ring_tilt(position: &Position, d: DayNumber) -> Radian {
    let ir = 28.06 * RADEG;
    let nr = (169.51 + 3.82e-5 * d) * RADEG;
    let (los, lat) = (position.ecliptic_longitude, position.ecliptic_latitude);
    safe_asin(lat.sin() * ir.cos() - lat.cos() * ir.sin() * (los - nr).sin())
}

/// Ephemeris of a planet.
///
/// ```text
/// elongation = acos((rs² + rg² − rh²) / (2·rs·rg))
/// FV         = acos((rh² + rg² − rs²) / (2·rh·rg))
/// magnitude  = C₀ + 5·log₁₀(rh·rg) + C_φ·FV[°] (+ higher order terms)
/// ```
///
/// Arguments
/// ---------
/// * `body`: the planet
/// * `position`: its geocentric position
/// * `sun`: the Sun solved for the same instant
/// * `d`: day number counted from 2000 January 0.0 UT (Saturn's ring node)
pub fn planet_ephemeris(
    body: Body,
    position: &Position,
    sun: &SunPosition,
    d: DayNumber,
) -> Ephemeris {
    let rs = sun.distance();
    let (rh, rg) = (position.rh, position.rg);

    let elongation = safe_acos((rs * rs + rg * rg - rh * rh) / (2.0 * rs * rg));
    let phase_angle = safe_acos((rh * rh + rg * rg - rs * rs) / (2.0 * rh * rg));
    let fv = phase_angle / RADEG;

    let (c0, c_phi, diameter) = magnitude_model(body);
    let mut magnitude = c0 + 5.0 * (rh * rg).log10() + c_phi * fv;
    match body {
        Body::Mercury => magnitude += 2.2e-13 * fv.powi(6),
        Body::Venus => magnitude += 4.2e-7 * fv.powi(3),
        Body::Saturn => {
            let b = saturn_ring_tilt(position, d);
            magnitude += -2.6 * b.abs().sin() + 1.2 * b.sin().powi(2);
        }
        _ => {}
    }

    Ephemeris {
        magnitude,
        phase: phase(phase_angle),
        phase_angle,
        elongation,
        apparent_diameter: diameter / rg,
    }
}

/// Ephemeris of the Moon.
///
/// The elongation is computed from the ecliptic longitudes of the Sun and the Moon and the
/// phase angle is taken as its supplement.
pub fn moon_ephemeris(moon: &MoonPosition, sun: &SunPosition) -> Ephemeris {
    let pos = &moon.position;
    let r = moon.distance_earth_radii;

    let elongation = safe_acos(
        (sun.true_longitude - pos.ecliptic_longitude).cos() * pos.ecliptic_latitude.cos(),
    );
    let fv = 180.0 - elongation / RADEG;
    let phase_angle = fv * RADEG;

    Ephemeris {
        magnitude: -21.62 + 5.0 * (sun.distance() * r).log10() + 0.026 * fv + 4e-9 * fv.powi(4),
        phase: phase(phase_angle),
        phase_angle,
        elongation,
        apparent_diameter: 1873.7 * 60.0 / r,
    }
}

#[cfg(test)]
mod ephemeris_test {
    use super::*;
    use crate::bodies::planet;
    use crate::observer::Observer;
    use approx::assert_abs_diff_eq;

    const D_1990: f64 = -3543.0;

    fn check(body: Body, mag: f64, ph: f64, elong: f64, diam: f64) {
        let sun = SunPosition::compute(D_1990).unwrap();
        let (_, pos) = planet::compute(body, D_1990, &sun).unwrap();
        let eph = planet_ephemeris(body, &pos, &sun, D_1990);
        assert_abs_diff_eq!(eph.magnitude, mag, epsilon = 1e-4);
        assert_abs_diff_eq!(eph.phase, ph, epsilon = 1e-5);
        assert_abs_diff_eq!(eph.elongation / RADEG, elong, epsilon = 1e-4);
        assert_abs_diff_eq!(eph.apparent_diameter, diam, epsilon = 1e-4);
        assert!((0.0..=1.0).contains(&eph.phase));
    }

    #[test]
    fn test_planet_ephemeris_1990() {
        check(Body::Mercury, 0.98333, 0.225323, 18.17268, 9.00713);
        check(Body::Venus, -4.174717, 0.589796, 45.374753, 20.23933);
        check(Body::Mars, 0.898897, 0.894437, 60.13438, 5.78454);
        check(Body::Jupiter, -1.821203, 0.992097, 66.35504, 35.70491);
        check(Body::Saturn, 0.440528, 0.997512, 93.5867, 16.64607);
    }

    #[test]
    fn test_outer_planet_magnitudes() {
        let sun = SunPosition::compute(D_1990).unwrap();
        let (_, pos) = planet::compute(Body::Uranus, D_1990, &sun).unwrap();
        let eph = planet_ephemeris(Body::Uranus, &pos, &sun, D_1990);
        assert_abs_diff_eq!(eph.magnitude, 5.690207, epsilon = 1e-4);

        let (_, pos) = planet::compute(Body::Neptune, D_1990, &sun).unwrap();
        let eph = planet_ephemeris(Body::Neptune, &pos, &sun, D_1990);
        assert_abs_diff_eq!(eph.magnitude, 7.882061, epsilon = 1e-4);
    }

    #[test]
    fn test_moon_ephemeris_1990() {
        let sun = SunPosition::compute(D_1990).unwrap();
        let observer = Observer::new(60.0, 15.0, 0.0).unwrap();
        let moon = MoonPosition::compute(D_1990, &sun, &observer, 221.8342085 * RADEG).unwrap();
        let eph = moon_ephemeris(&moon, &sun);
        assert_abs_diff_eq!(eph.magnitude, -9.767798, epsilon = 1e-4);
        assert_abs_diff_eq!(eph.phase, 0.428158, epsilon = 1e-5);
        assert_abs_diff_eq!(eph.elongation / RADEG, 81.738932, epsilon = 1e-4);
        assert_abs_diff_eq!(eph.apparent_diameter, 1852.7667, epsilon = 1e-3);
    }

    #[test]
    fn test_sun_ephemeris() {
        let sun = SunPosition::compute(D_1990).unwrap();
        let eph = sun_ephemeris(&sun);
        assert_eq!(eph.magnitude, SUN_MAGNITUDE);
        assert_eq!(eph.phase, SUN_PHASE);
        assert_eq!(eph.elongation, 0.0);
        assert_abs_diff_eq!(eph.apparent_diameter, 1919.26 / 1.0043229, epsilon = 1e-3);
    }

    #[test]
    fn test_clamped_trig() {
        assert_eq!(safe_acos(1.0 + 1e-12), 0.0);
        assert_abs_diff_eq!(safe_acos(-1.5), std::f64::consts::PI, epsilon = 1e-15);
        assert_abs_diff_eq!(safe_asin(2.0), std::f64::consts::FRAC_PI_2, epsilon = 1e-15);
        assert_eq!(phase(0.0), 1.0);
        assert_abs_diff_eq!(phase(std::f64::consts::PI), 0.0, epsilon = 1e-15);
    }
}
