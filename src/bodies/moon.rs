//! Geocentric lunar orbit with perturbations and topocentric correction.
use log::trace;

use super::sun::SunPosition;
use super::{series, Position, Term};
use crate::constants::{DayNumber, Radian, ERAU, RADEG};
use crate::kepler::{principal_angle, solve_orbit};
use crate::observer::Observer;
use crate::orbital_elements::{Body, OrbitalElements};
use crate::ref_system::{ecliptic_to_equatorial, from_spherical, to_spherical};
use crate::skymap_errors::SkyMapError;

// Arguments: (Mm, Ms, D, F).
// Longitude and latitude amplitudes in degrees, distance amplitudes in Earth radii.
const LONGITUDE: &[Term<4>] = &[
    Term::sin(-1.274, [1.0, 0.0, -2.0, 0.0], 0.0), // evection
    Term::sin(0.658, [0.0, 0.0, 2.0, 0.0], 0.0),   // variation
    Term::sin(-0.186, [0.0, 1.0, 0.0, 0.0], 0.0),  // yearly equation
    Term::sin(-0.059, [2.0, 0.0, -2.0, 0.0], 0.0),
    Term::sin(-0.057, [1.0, 1.0, -2.0, 0.0], 0.0),
    Term::sin(0.053, [1.0, 0.0, 2.0, 0.0], 0.0),
    Term::sin(0.046, [0.0, -1.0, 2.0, 0.0], 0.0),
    Term::sin(0.041, [1.0, -1.0, 0.0, 0.0], 0.0),
    Term::sin(-0.035, [0.0, 0.0, 1.0, 0.0], 0.0), // parallactic equation
    Term::sin(-0.031, [1.0, 1.0, 0.0, 0.0], 0.0),
    Term::sin(-0.015, [0.0, 0.0, -2.0, 2.0], 0.0),
    Term::sin(0.011, [1.0, 0.0, -4.0, 0.0], 0.0),
];

const LATITUDE: &[Term<4>] = &[
    Term::sin(-0.173, [0.0, 0.0, -2.0, 1.0], 0.0),
    Term::sin(-0.055, [1.0, 0.0, -2.0, -1.0], 0.0),
    Term::sin(-0.046, [1.0, 0.0, -2.0, 1.0], 0.0),
    Term::sin(0.033, [0.0, 0.0, 2.0, 1.0], 0.0),
    Term::sin(0.017, [2.0, 0.0, 0.0, 1.0], 0.0),
];

const DISTANCE: &[Term<4>] = &[
    Term::cos(-0.58, [1.0, 0.0, -2.0, 0.0], 0.0),
    Term::cos(-0.46, [0.0, 0.0, 2.0, 0.0], 0.0),
];

/// The solved Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    pub elements: OrbitalElements,
    /// Topocentric right ascension/declination, geocentric everything else
    pub position: Position,
    pub geocentric_right_ascension: Radian,
    pub geocentric_declination: Radian,
    /// Earth–Moon distance in Earth radii
    pub distance_earth_radii: f64,
}

impl MoonPosition {
    /// Solve the Moon's position as seen by an observer.
    ///
    /// Arguments
    /// ---------
    /// * `d`: day number counted from 2000 January 0.0 UT
    /// * `sun`: the Sun solved for the same `d`
    /// * `observer`: the observing site
    /// * `lst`: local sidereal time in radians
    pub fn compute(
        d: DayNumber,
        sun: &SunPosition,
        observer: &Observer,
        lst: Radian,
    ) -> Result<Self, SkyMapError> {
        let elements = Body::Moon.elements_at(d);
        let (plane, ecliptic) = solve_orbit(&elements)?;
        let ecl = to_spherical(&ecliptic);

        let moon_longitude = elements.mean_longitude();
        let elongation = moon_longitude - sun.mean_longitude;
        let latitude_argument = moon_longitude - elements.ascending_node_longitude;
        let args = [
            elements.mean_anomaly,
            sun.elements.mean_anomaly,
            elongation,
            latitude_argument,
        ];

        let lon = principal_angle(ecl.longitude + series(LONGITUDE, &args) * RADEG);
        let lat = ecl.latitude + series(LATITUDE, &args) * RADEG;
        let r = plane.radius + series(DISTANCE, &args);

        let geocentric = from_spherical(lon, lat, r) * ERAU;
        let equatorial = ecliptic_to_equatorial(&geocentric, d);
        let eq = to_spherical(&equatorial);

        let (ra, dec) = topocentric(
            eq.longitude,
            eq.latitude,
            1.0 / elements.semi_major_axis,
            observer,
            lst,
        );

        trace!(
            "Moon: geocentric ra = {}, dec = {}, topocentric ra = {ra}, dec = {dec}, r = {r}",
            eq.longitude,
            eq.latitude
        );

        Ok(MoonPosition {
            elements,
            position: Position {
                ecliptic: geocentric,
                equatorial,
                ecliptic_longitude: lon,
                ecliptic_latitude: lat,
                right_ascension: principal_angle(ra),
                declination: dec,
                rh: sun.distance(),
                rg: r * ERAU,
            },
            geocentric_right_ascension: principal_angle(eq.longitude),
            geocentric_declination: eq.latitude,
            distance_earth_radii: r,
        })
    }
}

/// Topocentric correction of geocentric equatorial coordinates.
///
/// `parallax` is the horizontal parallax in radians. At the equator the geocentric latitude is
/// zero and the declination correction takes the `cos(HA)` form.
fn topocentric(
    ra: Radian,
    dec: Radian,
    parallax: Radian,
    observer: &Observer,
    lst: Radian,
) -> (Radian, Radian) {
    let gclat = observer.geocentric_latitude();
    let rho = observer.geocentric_radius();
    let ha = lst - ra;

    let top_ra = ra - parallax * rho * gclat.cos() * ha.sin() / dec.cos();
    let top_dec = if gclat.abs() > 1e-12 {
        let g = (gclat.tan() / ha.cos()).atan();
        dec - parallax * rho * gclat.sin() * (g - dec).sin() / g.sin()
    } else {
        dec - parallax * rho * (-dec).sin() * ha.cos()
    };
    (top_ra, top_dec)
}

#[cfg(test)]
mod moon_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_moon_1990() {
        let d = -3543.0;
        let sun = SunPosition::compute(d).unwrap();
        let observer = Observer::new(60.0, 15.0, 0.0).unwrap();
        let moon = MoonPosition::compute(d, &sun, &observer, 221.8342085 * RADEG).unwrap();

        assert_abs_diff_eq!(
            moon.geocentric_right_ascension / RADEG,
            309.501126,
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(
            moon.geocentric_declination / RADEG,
            -19.103245,
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(
            moon.position.right_ascension / RADEG,
            310.005031,
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(moon.position.declination / RADEG, -19.884327, epsilon = 1e-4);
        assert_abs_diff_eq!(moon.distance_earth_radii, 60.677903, epsilon = 1e-5);
        assert_abs_diff_eq!(moon.position.rg, 60.677903 * ERAU, epsilon = 1e-9);
        assert_eq!(moon.position.rh, sun.distance());
    }

    #[test]
    fn test_moon_equator() {
        let d = 1.0;
        let sun = SunPosition::compute(d).unwrap();
        let observer = Observer::new(0.0, 0.0, 0.0).unwrap();
        let moon = MoonPosition::compute(d, &sun, &observer, 99.9671765 * RADEG).unwrap();

        assert!(moon.position.declination.is_finite());
        assert_abs_diff_eq!(
            moon.position.right_ascension / RADEG,
            217.556593,
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(moon.position.declination / RADEG, -8.931428, epsilon = 1e-4);
        assert_abs_diff_eq!(
            moon.geocentric_right_ascension / RADEG,
            216.696902,
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(
            moon.geocentric_declination / RADEG,
            -8.998309,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_topocentric_overhead() {
        // no correction for a body at the zenith of an equatorial observer
        let observer = Observer::new(0.0, 0.0, 0.0).unwrap();
        let (ra, dec) = topocentric(1.0, 0.0, 0.0166, &observer, 1.0);
        assert_abs_diff_eq!(ra, 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(dec, 0.0, epsilon = 1e-15);
    }
}
