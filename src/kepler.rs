//! # Kepler solver
//!
//! Solution of Kepler's equation `M = E − e·sin E` by Newton iteration and placement of the
//! body on its orbit, first in the orbital plane and then in ecliptic rectangular coordinates.
//!
//! ## See also
//! * [`crate::orbital_elements::OrbitalElements`] – input of [`solve_orbit`]
//! * [`crate::bodies`] – perturbations applied on top of the Keplerian position
use log::warn;
use nalgebra::Vector3;

use crate::constants::{Radian, DPI, KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE};
use crate::orbital_elements::OrbitalElements;
use crate::skymap_errors::SkyMapError;

/// Return the principal value of an angle in radians, in [0, 2π).
pub fn principal_angle(a: Radian) -> Radian {
    a.rem_euclid(DPI)
}

/// Solve Kepler's equation for the eccentric anomaly.
///
/// The iteration is seeded with `E₀ = M + e·sin M·(1 + e·cos M)` and stops as soon as two
/// successive estimates differ by less than [`KEPLER_TOLERANCE`]. For `e = 0` the first Newton
/// step returns `M` exactly.
///
/// The secular element tables drift slightly below `e = 0` far from J2000; such values are
/// solved like any other `|e| < 1`.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly M in radians
/// * `eccentricity`: orbital eccentricity, `|e| < 1`
///
/// Return
/// ------
/// * the eccentric anomaly E in radians,
/// * [`SkyMapError::UnboundOrbit`] if `|e| ≥ 1` or `e` is not finite,
/// * [`SkyMapError::KeplerNonConvergence`] if the iteration cap is reached.
pub fn solve_kepler(mean_anomaly: Radian, eccentricity: f64) -> Result<Radian, SkyMapError> {
    let e = eccentricity;
    if e.is_nan() || e.abs() >= 1.0 {
        return Err(SkyMapError::UnboundOrbit(e));
    }

    let m = mean_anomaly;
    let mut e0 = m + e * m.sin() * (1.0 + e * m.cos());
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let e1 = e0 - (e0 - e * e0.sin() - m) / (1.0 - e * e0.cos());
        if (e1 - e0).abs() < KEPLER_TOLERANCE {
            return Ok(e1);
        }
        e0 = e1;
    }

    warn!("Kepler solver did not converge for M = {m}, e = {e}");
    Err(SkyMapError::KeplerNonConvergence {
        eccentricity: e,
        iterations: KEPLER_MAX_ITERATIONS,
    })
}

/// Position of a body in its orbital plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanePosition {
    /// True anomaly v, radians
    pub true_anomaly: Radian,
    /// Distance to the central body, same unit as the semi-major axis
    pub radius: f64,
}

/// Orbital-plane position from the eccentric anomaly.
///
/// ```text
/// xv = a·(cos E − e)
/// yv = a·√(1 − e²)·sin E
/// v  = atan2(yv, xv),  r = √(xv² + yv²)
/// ```
pub fn plane_position(
    semi_major_axis: f64,
    eccentricity: f64,
    ecc_anomaly: Radian,
) -> PlanePosition {
    let a = semi_major_axis;
    let e = eccentricity;
    let xv = a * (ecc_anomaly.cos() - e);
    let yv = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();
    PlanePosition {
        true_anomaly: yv.atan2(xv),
        radius: xv.hypot(yv),
    }
}

/// Ecliptic rectangular coordinates of a body from its orbital-plane position.
///
/// Rotation of the orbital plane by the node longitude N, the argument of perihelion w and the
/// inclination i.
pub fn ecliptic_position(elements: &OrbitalElements, plane: &PlanePosition) -> Vector3<f64> {
    let n = elements.ascending_node_longitude;
    let i = elements.inclination;
    let vw = plane.true_anomaly + elements.periapsis_argument;
    let r = plane.radius;

    let (sin_n, cos_n) = n.sin_cos();
    let (sin_vw, cos_vw) = vw.sin_cos();
    let (sin_i, cos_i) = i.sin_cos();

    Vector3::new(
        r * (cos_n * cos_vw - sin_n * sin_vw * cos_i),
        r * (sin_n * cos_vw + cos_n * sin_vw * cos_i),
        r * sin_vw * sin_i,
    )
}

/// Solve the two-body problem for one set of elements.
///
/// Return
/// ------
/// * the orbital-plane position and the matching ecliptic rectangular vector.
pub fn solve_orbit(
    elements: &OrbitalElements,
) -> Result<(PlanePosition, Vector3<f64>), SkyMapError> {
    let ecc_anomaly = solve_kepler(elements.mean_anomaly, elements.eccentricity)?;
    let plane = plane_position(elements.semi_major_axis, elements.eccentricity, ecc_anomaly);
    Ok((plane, ecliptic_position(elements, &plane)))
}
