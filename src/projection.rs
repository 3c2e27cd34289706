//! # Horizon projector
//!
//! Equatorial coordinates → horizontal coordinates → polar map.
//!
//! ## Overview
//!
//! The map is centred on the zenith, with the horizon on the unit circle:
//!
//! ```text
//! H = lst − α
//! sin a = sin δ·sin φ + cos δ·cos φ·cos H
//! z = atan2(−cos δ·cos φ·sin H, sin δ − sin φ·sin a)
//! x = cos z·tan((π/2 − a)/2),  y = sin z·tan((π/2 − a)/2)
//! ```
//!
//! A point is visible when its altitude is strictly positive. Points below the horizon still get
//! map coordinates (outside the unit circle), which the segment clipping relies on.
//!
//! Segments with one end on each side of the horizon are cut where they cross the unit circle,
//! see [`clip_to_horizon`].
//!
//! ## See also
//! * [`crate::catalog`] – applies the projector to catalog entries
use std::f64::consts::FRAC_PI_2;

use log::warn;
use nalgebra::Point2;

use crate::constants::{Degree, Hour, Radian, DEG_PER_HOUR, RADEG};

/// Equatorial coordinates, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    pub right_ascension: Radian,
    pub declination: Radian,
}

impl EquatorialCoords {
    pub fn new(right_ascension: Radian, declination: Radian) -> Self {
        EquatorialCoords {
            right_ascension,
            declination,
        }
    }

    /// From a right ascension in hours and a declination in degrees.
    pub fn from_hours_degrees(ra: Hour, dec: Degree) -> Self {
        Self::new(ra * DEG_PER_HOUR * RADEG, dec * RADEG)
    }
}

/// Horizontal coordinates, radians.
///
/// `azimuth` is the polar angle of the map, measured from the north point towards the east.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizontal {
    pub altitude: Radian,
    pub azimuth: Radian,
}

impl Horizontal {
    /// Position on the polar map.
    ///
    /// Defined for any altitude; points of altitude 0 fall on the unit circle.
    pub fn to_map(&self) -> Point2<f64> {
        let rho = ((FRAC_PI_2 - self.altitude) / 2.0).tan();
        Point2::new(self.azimuth.cos() * rho, self.azimuth.sin() * rho)
    }

    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

/// A point on the polar map with its visibility flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub point: Point2<f64>,
    pub visible: bool,
}

/// A visible segment on the polar map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedSegment {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
    /// `true` if one end was moved onto the horizon circle
    pub clipped: bool,
}

/// The projector for one observer latitude and one sidereal time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    latitude: Radian,
    lst: Radian,
}

impl Projector {
    /// Arguments
    /// ---------
    /// * `latitude`: observer latitude, radians
    /// * `lst`: local sidereal time, radians
    pub fn new(latitude: Radian, lst: Radian) -> Self {
        Projector { latitude, lst }
    }

    pub fn latitude(&self) -> Radian {
        self.latitude
    }

    pub fn lst(&self) -> Radian {
        self.lst
    }

    /// Altitude and azimuth of a point of the sky.
    pub fn to_horizontal(&self, coords: &EquatorialCoords) -> Horizontal {
        let h = self.lst - coords.right_ascension;
        let (sin_dec, cos_dec) = coords.declination.sin_cos();
        let (sin_lat, cos_lat) = self.latitude.sin_cos();

        let sin_a = sin_dec * sin_lat + cos_dec * cos_lat * h.cos();
        let altitude = sin_a.clamp(-1.0, 1.0).asin();
        let y = -cos_dec * cos_lat * h.sin();
        let x = sin_dec - sin_lat * sin_a;
        Horizontal {
            altitude,
            azimuth: y.atan2(x),
        }
    }

    /// Project a point; visible if its altitude is strictly positive.
    pub fn project(&self, coords: &EquatorialCoords) -> ProjectedPoint {
        let hz = self.to_horizontal(coords);
        ProjectedPoint {
            point: hz.to_map(),
            visible: hz.is_above_horizon(),
        }
    }

    /// Project a segment, clipping it at the horizon.
    ///
    /// Return
    /// ------
    /// * `None` if the segment is not visible (both ends below the horizon, or one end exactly on
    ///   it and the other below),
    /// * the segment as is if both ends are above the horizon,
    /// * otherwise a segment from the end above the horizon to the horizon crossing.
    pub fn project_segment(
        &self,
        a: &EquatorialCoords,
        b: &EquatorialCoords,
    ) -> Option<ProjectedSegment> {
        let h1 = self.to_horizontal(a);
        let h2 = self.to_horizontal(b);

        if h1.altitude > 0.0 && h2.altitude > 0.0 {
            return Some(ProjectedSegment {
                start: h1.to_map(),
                end: h2.to_map(),
                clipped: false,
            });
        }

        if h1.altitude * h2.altitude < 0.0 {
            let (top, bottom) = if h1.altitude > 0.0 { (h1, h2) } else { (h2, h1) };
            let start = top.to_map();
            let end = clip_to_horizon(&start, &bottom.to_map()).unwrap_or_else(|| {
                warn!("no horizon crossing on the segment, keeping the end below the horizon");
                bottom.to_map()
            });
            return Some(ProjectedSegment {
                start,
                end,
                clipped: true,
            });
        }

        None
    }
}

/// `true` if `x` lies strictly between `a` and `b`, in any order.
pub fn between(a: f64, b: f64, x: f64) -> bool {
    let (lo, hi) = if a > b { (b, a) } else { (a, b) };
    lo < x && x < hi
}

/// Intersection of a map segment with the horizon circle.
///
/// The line through both ends, `y = M·x + c`, is intersected with `x² + y² = 1`:
///
/// ```text
/// (M² + 1)·x² + 2·c·M·x + (c² − 1) = 0
/// ```
///
/// A root is admissible when it lies strictly between the two ends on both axes. The roots are
/// tried in turn, each admissible one replacing the far end, so the second is tested against the
/// segment already shortened by the first.
///
/// Arguments
/// ---------
/// * `inside`: end above the horizon (inside the unit circle)
/// * `outside`: end below the horizon
///
/// Return
/// ------
/// * the crossing point, or `None` if no root is admissible (e.g. a vertical segment, whose
///   slope is not finite).
pub fn clip_to_horizon(inside: &Point2<f64>, outside: &Point2<f64>) -> Option<Point2<f64>> {
    let (x1, y1) = (inside.x, inside.y);
    let m = (y1 - outside.y) / (x1 - outside.x);
    let c = y1 - m * x1;

    let aq = m * m + 1.0;
    let bq = 2.0 * c * m;
    let cq = c * c - 1.0;
    let sqrt_dg = (bq * bq - 4.0 * aq * cq).sqrt();

    let mut end = *outside;
    let mut found = false;
    for xr in [(-bq + sqrt_dg) / (2.0 * aq), (-bq - sqrt_dg) / (2.0 * aq)] {
        let yr = m * xr + c;
        if between(x1, end.x, xr) && between(y1, end.y, yr) {
            end = Point2::new(xr, yr);
            found = true;
        }
    }

    found.then_some(end)
}
