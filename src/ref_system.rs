use nalgebra::{Rotation3, Vector3};

use crate::constants::{DayNumber, Radian, RADEG};

/// Principal axes of a rectangular frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Spherical coordinates of a rectangular vector.
///
/// `longitude` is the angle in the xy-plane (ecliptic longitude or right ascension),
/// `latitude` the angle above that plane (ecliptic latitude or declination).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub longitude: Radian,
    pub latitude: Radian,
    pub radius: f64,
}

/// Mean obliquity of the ecliptic.
///
/// A linear secular decrease from 23.4393° at J2000.0:
///
/// ```text
/// ε(d) = 23.4393° − 3.563·10⁻⁷°·d
/// ```
///
/// Arguments
/// ---------
/// * `d`: day number
///
/// Returns
/// --------
/// * Mean obliquity of the ecliptic in radians.
///
/// # See also
/// * [`ecliptic_to_equatorial`] – rotation by this angle
pub fn obliquity(d: DayNumber) -> Radian {
    (23.4393 - 3.563e-7 * d) * RADEG
}

/// Construct a right-handed rotation around one of the principal axes.
///
/// The rotation is **active**: it rotates the vector by `alpha` in the direct
/// (counter-clockwise) sense, in a fixed frame.
///
/// # Arguments
///
/// * `alpha` - Rotation angle in **radians**.
/// * `axis` - Axis of rotation.
///
/// # See also
/// * [`ecliptic_to_equatorial`] – rotation around X by the obliquity
pub fn rotation(alpha: Radian, axis: Axis) -> Rotation3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };

    Rotation3::from_axis_angle(&axis, alpha)
}

/// Rotate ecliptic rectangular coordinates into the equatorial frame.
///
/// ```text
/// x_eq = x
/// y_eq = y·cos ε − z·sin ε
/// z_eq = y·sin ε + z·cos ε
/// ```
pub fn ecliptic_to_equatorial(ecliptic: &Vector3<f64>, d: DayNumber) -> Vector3<f64> {
    rotation(obliquity(d), Axis::X) * ecliptic
}

/// Spherical coordinates (longitude, latitude, radius) of a rectangular vector.
///
/// The longitude is returned as given by `atan2`, in (−π, π].
pub fn to_spherical(v: &Vector3<f64>) -> Spherical {
    Spherical {
        longitude: v.y.atan2(v.x),
        latitude: v.z.atan2(v.x.hypot(v.y)),
        radius: v.norm(),
    }
}

/// Rectangular vector from spherical coordinates.
pub fn from_spherical(longitude: Radian, latitude: Radian, radius: f64) -> Vector3<f64> {
    let (sin_lon, cos_lon) = longitude.sin_cos();
    let (sin_lat, cos_lat) = latitude.sin_cos();
    Vector3::new(
        radius * cos_lon * cos_lat,
        radius * sin_lon * cos_lat,
        radius * sin_lat,
    )
}

#[cfg(test)]
mod ref_system_test {

    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_obliquity() {
        assert_abs_diff_eq!(obliquity(0.0), 23.4393 * RADEG, epsilon = 1e-15);
        // about 0.013° per century
        let century = obliquity(36525.0) - obliquity(0.0);
        assert_abs_diff_eq!(century / RADEG, -0.013014, epsilon = 1e-6);
    }

    #[test]
    fn test_rotation() {
        let r = rotation(PI / 2.0, Axis::Z);
        assert_abs_diff_eq!(
            r * Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            epsilon = 1e-15
        );
        let r = rotation(PI / 2.0, Axis::Y);
        assert_abs_diff_eq!(
            r * Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(1.0, 0.0, 0.0),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_ecliptic_to_equatorial() {
        let eps = obliquity(0.0);
        // the ecliptic pole moves away from the celestial pole by ε
        let pole = ecliptic_to_equatorial(&Vector3::new(0.0, 0.0, 1.0), 0.0);
        assert_abs_diff_eq!(pole, Vector3::new(0.0, -eps.sin(), eps.cos()), epsilon = 1e-15);

        // the vernal equinox direction is invariant
        let x = ecliptic_to_equatorial(&Vector3::new(2.0, 0.0, 0.0), 0.0);
        assert_abs_diff_eq!(x, Vector3::new(2.0, 0.0, 0.0), epsilon = 1e-15);

        // summer solstice: declination equals ε
        let sph = to_spherical(&ecliptic_to_equatorial(&Vector3::new(0.0, 1.0, 0.0), 0.0));
        assert_abs_diff_eq!(sph.latitude, eps, epsilon = 1e-15);
        assert_abs_diff_eq!(sph.longitude, PI / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_spherical() {
        let v = from_spherical(1.0, -0.3, 2.5);
        let s = to_spherical(&v);
        assert_abs_diff_eq!(s.longitude, 1.0, epsilon = 1e-14);
        assert_abs_diff_eq!(s.latitude, -0.3, epsilon = 1e-14);
        assert_abs_diff_eq!(s.radius, 2.5, epsilon = 1e-14);
    }
}
