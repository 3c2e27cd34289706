//! # Orbital elements of the solar-system bodies
//!
//! Low-precision mean orbital elements of the Sun (i.e. the Earth's orbit seen from the Earth),
//! the Moon and the seven major planets, as linear secular functions of the day number.
//!
//! ## Overview
//!
//! - [`Body`]: the modelled bodies in their fixed identity order
//! - [`OrbitalElements`]: one set of elements, recomputed from scratch for every instant
//! - [`Body::elements_at`]: the per-body secular tables
//!
//! The tables are referred to 2000 January 0.0 UT, so their argument is
//! [`crate::time::Instant::elements_day`], not the raw day number.
use std::fmt;

use crate::constants::{DayNumber, RADEG};
use crate::time::rev;

/// Kind of a body, which selects its position model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Sun,
    Planet,
    Moon,
}

/// The modelled solar-system bodies.
///
/// The discriminant is the stable identity exposed to the renderer for selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun = 0,
    Mercury = 1,
    Venus = 2,
    Moon = 3,
    Mars = 4,
    Jupiter = 5,
    Saturn = 6,
    Uranus = 7,
    Neptune = 8,
}

impl Body {
    /// All bodies, in identity order
    pub const ALL: [Body; 9] = [
        Body::Sun,
        Body::Mercury,
        Body::Venus,
        Body::Moon,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    pub fn id(self) -> usize {
        self as usize
    }

    pub fn from_id(id: usize) -> Option<Body> {
        Body::ALL.get(id).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Moon => "Moon",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
        }
    }

    pub fn kind(self) -> BodyKind {
        match self {
            Body::Sun => BodyKind::Sun,
            Body::Moon => BodyKind::Moon,
            _ => BodyKind::Planet,
        }
    }

    /// Mean orbital elements of the body.
    ///
    /// Angles are folded into `[0, 2π)`. The semi-major axis is in AU, except for the Moon
    /// whose geocentric orbit is expressed in Earth radii.
    ///
    /// Arguments
    /// ---------
    /// * `d`: day number counted from 2000 January 0.0 UT
    ///   (see [`crate::time::Instant::elements_day`])
    pub fn elements_at(self, d: DayNumber) -> OrbitalElements {
        // (N, i, w, a, e, M): angles in degrees
        let (n, i, w, a, e, m) = match self {
            Body::Sun => (
                0.0,
                0.0,
                282.9404 + 4.70935e-5 * d,
                1.0,
                0.016709 - 1.151e-9 * d,
                356.0470 + 0.9856002585 * d,
            ),
            Body::Mercury => (
                48.3313 + 3.24587e-5 * d,
                7.0047 + 5.00e-8 * d,
                29.1241 + 1.01444e-5 * d,
                0.387098,
                0.205635 + 5.59e-10 * d,
                168.6562 + 4.0923344368 * d,
            ),
            Body::Venus => (
                76.6799 + 2.46590e-5 * d,
                3.3946 + 2.75e-8 * d,
                54.8910 + 1.38374e-5 * d,
                0.723330,
                0.006773 - 1.302e-9 * d,
                48.0052 + 1.6021302244 * d,
            ),
            Body::Moon => (
                125.1228 - 0.0529538083 * d,
                5.1454,
                318.0634 + 0.1643573223 * d,
                60.2666,
                0.054900,
                115.3654 + 13.0649929509 * d,
            ),
            Body::Mars => (
                49.5574 + 2.11081e-5 * d,
                1.8497 - 1.78e-8 * d,
                286.5016 + 2.92961e-5 * d,
                1.523688,
                0.093405 + 2.516e-9 * d,
                18.6021 + 0.5240207766 * d,
            ),
            Body::Jupiter => (
                100.4542 + 2.76854e-5 * d,
                1.3030 - 1.557e-7 * d,
                273.8777 + 1.64505e-5 * d,
                5.20256,
                0.048498 + 4.469e-9 * d,
                19.8950 + 0.0830853001 * d,
            ),
            Body::Saturn => (
                113.6634 + 2.38980e-5 * d,
                2.4886 - 1.081e-7 * d,
                339.3939 + 2.97661e-5 * d,
                9.55475,
                0.055546 - 9.499e-9 * d,
                316.9670 + 0.0334442282 * d,
            ),
            Body::Uranus => (
                74.0005 + 1.3978e-5 * d,
                0.7733 + 1.9e-8 * d,
                96.6612 + 3.0565e-5 * d,
                19.18171 - 1.55e-8 * d,
                0.047318 + 7.45e-9 * d,
                142.5905 + 0.011725806 * d,
            ),
            Body::Neptune => (
                131.7806 + 3.0173e-5 * d,
                1.7700 - 2.55e-7 * d,
                272.8461 - 6.027e-6 * d,
                30.05826 + 3.313e-8 * d,
                0.008606 + 2.15e-9 * d,
                260.2471 + 0.005995147 * d,
            ),
        };

        OrbitalElements {
            ascending_node_longitude: rev(n) * RADEG,
            inclination: rev(i) * RADEG,
            periapsis_argument: rev(w) * RADEG,
            semi_major_axis: a,
            eccentricity: e,
            mean_anomaly: rev(m) * RADEG,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Keplerian orbital elements at one instant.
///
/// Units:
/// * `ascending_node_longitude`: radians
/// * `inclination`: radians
/// * `periapsis_argument`: radians
/// * `semi_major_axis`: AU (Earth radii for the Moon)
/// * `eccentricity`: unitless
/// * `mean_anomaly`: radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub ascending_node_longitude: f64,
    pub inclination: f64,
    pub periapsis_argument: f64,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub mean_anomaly: f64,
}

impl OrbitalElements {
    /// Mean longitude `M + w + N`, in radians (not folded)
    pub fn mean_longitude(&self) -> f64 {
        self.mean_anomaly + self.periapsis_argument + self.ascending_node_longitude
    }
}
