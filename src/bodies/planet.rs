//! Heliocentric planets: Mercury to Neptune.
//!
//! The Keplerian position is corrected by the low-precision perturbation series of the three
//! giant planets on each other (Jupiter/Saturn great inequality, Uranus), then moved to the
//! Earth by adding the Sun's geocentric offset.
use log::trace;

use super::sun::SunPosition;
use super::{series, Position, Term};
use crate::constants::{DayNumber, RADEG};
use crate::kepler::{principal_angle, solve_orbit};
use crate::orbital_elements::{Body, OrbitalElements};
use crate::ref_system::{ecliptic_to_equatorial, from_spherical, to_spherical};
use crate::skymap_errors::SkyMapError;

// Arguments: (Mj, Ms, Mu). Amplitudes in degrees.
const JUPITER_LONGITUDE: &[Term<3>] = &[
    Term::sin(-0.332, [2.0, -5.0, 0.0], -67.6),
    Term::sin(-0.056, [2.0, -2.0, 0.0], 21.0),
    Term::sin(0.042, [3.0, -5.0, 0.0], 21.0),
    Term::sin(-0.036, [1.0, -2.0, 0.0], 0.0),
    Term::cos(0.022, [1.0, -1.0, 0.0], 0.0),
    Term::sin(0.023, [2.0, -3.0, 0.0], 52.0),
    Term::sin(-0.016, [1.0, -5.0, 0.0], -69.0),
];

const SATURN_LONGITUDE: &[Term<3>] = &[
    Term::sin(0.812, [2.0, -5.0, 0.0], -67.6),
    Term::cos(-0.229, [2.0, -4.0, 0.0], -2.0),
    Term::sin(0.119, [1.0, -2.0, 0.0], -3.0),
    Term::sin(0.046, [2.0, -6.0, 0.0], -69.0),
    Term::sin(0.014, [1.0, -3.0, 0.0], 32.0),
];

const SATURN_LATITUDE: &[Term<3>] = &[
    Term::cos(-0.020, [2.0, -4.0, 0.0], -2.0),
    Term::sin(0.018, [2.0, -6.0, 0.0], -49.0),
];

const UNPERTURBED: &[Term<3>] = &[];

const URANUS_LONGITUDE: &[Term<3>] = &[
    Term::sin(0.040, [0.0, 1.0, -2.0], 6.0),
    Term::sin(0.035, [0.0, 1.0, -3.0], 33.0),
    Term::sin(-0.015, [1.0, 0.0, -1.0], 20.0),
];

/// Perturbation tables of a planet: (longitude, latitude), both in degrees.
fn perturbation_tables(body: Body) -> (&'static [Term<3>], &'static [Term<3>]) {
    match body {
        Body::Jupiter => (JUPITER_LONGITUDE, UNPERTURBED),
        Body::Saturn => (SATURN_LONGITUDE, SATURN_LATITUDE),
        Body::Uranus => (URANUS_LONGITUDE, UNPERTURBED),
        _ => (UNPERTURBED, UNPERTURBED),
    }
}

/// Solve the geocentric position of a planet.
///
/// Arguments
/// ---------
/// * `body`: one of the planets
/// * `d`: day number counted from 2000 January 0.0 UT
/// * `sun`: the Sun solved for the same `d`
///
/// Return
/// ------
/// * the planet's elements and geocentric position, or a Kepler solver error.
///
/// A body without a perturbation table is solved as a plain heliocentric orbit.
pub fn compute(
    body: Body,
    d: DayNumber,
    sun: &SunPosition,
) -> Result<(OrbitalElements, Position), SkyMapError> {
    let elements = body.elements_at(d);
    let (plane, heliocentric) = solve_orbit(&elements)?;
    let helio = to_spherical(&heliocentric);

    let (lon_terms, lat_terms) = perturbation_tables(body);
    let (lon, lat) = if lon_terms.is_empty() && lat_terms.is_empty() {
        (helio.longitude, helio.latitude)
    } else {
        let args = [
            Body::Jupiter.elements_at(d).mean_anomaly,
            Body::Saturn.elements_at(d).mean_anomaly,
            Body::Uranus.elements_at(d).mean_anomaly,
        ];
        (
            helio.longitude + series(lon_terms, &args) * RADEG,
            helio.latitude + series(lat_terms, &args) * RADEG,
        )
    };

    let geocentric = from_spherical(lon, lat, plane.radius) + sun.offset;
    let geo = to_spherical(&geocentric);
    let equatorial = ecliptic_to_equatorial(&geocentric, d);
    let eq = to_spherical(&equatorial);

    trace!(
        "{body}: ra = {}, dec = {}, rh = {}, rg = {}",
        eq.longitude,
        eq.latitude,
        plane.radius,
        geo.radius
    );

    Ok((
        elements,
        Position {
            ecliptic: geocentric,
            equatorial,
            ecliptic_longitude: principal_angle(geo.longitude),
            ecliptic_latitude: geo.latitude,
            right_ascension: principal_angle(eq.longitude),
            declination: eq.latitude,
            rh: plane.radius,
            rg: geo.radius,
        },
    ))
}

#[cfg(test)]
mod planet_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    const D_1990: f64 = -3543.0;

    fn check(body: Body, ra: f64, dec: f64, rh: f64, rg: f64) {
        let sun = SunPosition::compute(D_1990).unwrap();
        let (_, pos) = compute(body, D_1990, &sun).unwrap();
        assert_abs_diff_eq!(pos.right_ascension / RADEG, ra, epsilon = 1e-4);
        assert_abs_diff_eq!(pos.declination / RADEG, dec, epsilon = 1e-4);
        assert_abs_diff_eq!(pos.rh, rh, epsilon = 1e-5);
        assert_abs_diff_eq!(pos.rg, rg, epsilon = 1e-5);
    }

    #[test]
    fn test_inner_planets_1990() {
        check(Body::Mercury, 43.259748, 19.645915, 0.374861, 0.748296);
        check(Body::Venus, 344.762841, -6.894281, 0.726607, 0.835996);
        check(Body::Mars, 331.219974, -13.305018, 1.417194, 1.618107);
    }

    #[test]
    fn test_perturbed_planets_1990() {
        check(Body::Jupiter, 95.497092, 23.449251, 5.195079, 5.515769);
        check(Body::Saturn, 297.011526, -20.930955, 10.061177, 9.948293);
        check(Body::Uranus, 280.438257, -23.400206, 19.396282, 19.044171);
        check(Body::Neptune, 285.714267, -21.784327, 30.192853, 29.932176);
    }

    #[test]
    fn test_perturbation_tables() {
        assert_eq!(perturbation_tables(Body::Jupiter).0.len(), 7);
        assert_eq!(perturbation_tables(Body::Saturn).1.len(), 2);
        assert!(perturbation_tables(Body::Mars).0.is_empty());
    }
}
