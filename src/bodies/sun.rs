//! Apparent orbit of the Sun around the Earth.
use log::trace;
use nalgebra::Vector3;

use super::Position;
use crate::constants::{DayNumber, Radian};
use crate::kepler::{plane_position, principal_angle, solve_kepler};
use crate::orbital_elements::{Body, OrbitalElements};
use crate::ref_system::{ecliptic_to_equatorial, to_spherical};
use crate::skymap_errors::SkyMapError;

/// The solved Sun, with the quantities other bodies depend on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    pub elements: OrbitalElements,
    pub position: Position,
    /// Mean longitude `M + w`, in [0, 2π)
    pub mean_longitude: Radian,
    /// True longitude `v + w`, in [0, 2π)
    pub true_longitude: Radian,
    /// Geocentric ecliptic rectangular position of the Sun (z = 0), AU.
    /// Added to a heliocentric vector it gives the geocentric one.
    pub offset: Vector3<f64>,
}

impl SunPosition {
    /// Solve the Sun's position.
    ///
    /// Arguments
    /// ---------
    /// * `d`: day number counted from 2000 January 0.0 UT
    pub fn compute(d: DayNumber) -> Result<Self, SkyMapError> {
        let elements = Body::Sun.elements_at(d);
        let ecc_anomaly = solve_kepler(elements.mean_anomaly, elements.eccentricity)?;
        let plane = plane_position(
            elements.semi_major_axis,
            elements.eccentricity,
            ecc_anomaly,
        );

        let true_longitude = principal_angle(plane.true_anomaly + elements.periapsis_argument);
        let rs = plane.radius;
        let offset = Vector3::new(rs * true_longitude.cos(), rs * true_longitude.sin(), 0.0);
        let equatorial = ecliptic_to_equatorial(&offset, d);
        let eq = to_spherical(&equatorial);

        trace!(
            "Sun: d = {d}, lon = {true_longitude}, ra = {}, dec = {}, r = {rs}",
            eq.longitude,
            eq.latitude
        );

        Ok(SunPosition {
            elements,
            position: Position {
                ecliptic: offset,
                equatorial,
                ecliptic_longitude: true_longitude,
                ecliptic_latitude: 0.0,
                right_ascension: principal_angle(eq.longitude),
                declination: eq.latitude,
                rh: rs,
                rg: rs,
            },
            mean_longitude: principal_angle(elements.mean_anomaly + elements.periapsis_argument),
            true_longitude,
            offset,
        })
    }

    /// Earth–Sun distance, AU
    pub fn distance(&self) -> f64 {
        self.position.rg
    }
}
