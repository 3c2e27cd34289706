//! # Solar-system body models
//!
//! Position models of the three kinds of body handled by the engine:
//!
//! - [`sun`]: the Sun, i.e. the Earth's orbit seen from the Earth. It is solved first and its
//!   result is an explicit input of every other model.
//! - [`planet`]: heliocentric Keplerian orbit, perturbation series for Jupiter, Saturn and
//!   Uranus, then shifted to the Earth with the Sun's offset.
//! - [`moon`]: geocentric Keplerian orbit with the lunar perturbation series and a
//!   topocentric parallax correction.
//!
//! Each model produces a [`Position`]; [`CelestialBody`] bundles the position with the
//! ephemeris and the rise/set times of the same instant.
//!
//! ## Units
//!
//! - Rectangular vectors: **AU**, geocentric.
//! - Angles: **radians**; right ascension folded into `[0, 2π)`.
use nalgebra::Vector3;

use crate::constants::{AstronomicalUnit, Degree, Radian, RADEG};
use crate::ephemeris::Ephemeris;
use crate::orbital_elements::{Body, OrbitalElements};
use crate::rise_set::RiseSet;

pub mod moon;
pub mod planet;
pub mod sun;

/// Geocentric position of a body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Geocentric ecliptic rectangular coordinates, AU
    pub ecliptic: Vector3<f64>,
    /// Geocentric equatorial rectangular coordinates, AU
    pub equatorial: Vector3<f64>,
    /// Geocentric ecliptic longitude
    pub ecliptic_longitude: Radian,
    /// Geocentric ecliptic latitude
    pub ecliptic_latitude: Radian,
    /// Apparent right ascension in [0, 2π) (topocentric for the Moon)
    pub right_ascension: Radian,
    /// Apparent declination (topocentric for the Moon)
    pub declination: Radian,
    /// Distance to the Sun (Earth–Sun distance for the Sun itself)
    pub rh: AstronomicalUnit,
    /// Distance to the Earth
    pub rg: AstronomicalUnit,
}

/// A solved solar-system body, ready to be projected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialBody {
    pub body: Body,
    pub elements: OrbitalElements,
    pub position: Position,
    pub ephemeris: Ephemeris,
    pub rise_set: RiseSet,
}

impl CelestialBody {
    /// Stable identity exposed to the renderer
    pub fn id(&self) -> usize {
        self.body.id()
    }

    pub fn name(&self) -> &'static str {
        self.body.name()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Trig {
    Sin,
    Cos,
}

/// One term of a periodic perturbation series:
/// `amplitude · trig(Σ multipliers[k]·args[k] + phase)`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Term<const N: usize> {
    pub amplitude: f64,
    pub trig: Trig,
    pub multipliers: [f64; N],
    pub phase: Degree,
}

impl<const N: usize> Term<N> {
    pub(crate) const fn sin(amplitude: f64, multipliers: [f64; N], phase: Degree) -> Self {
        Term {
            amplitude,
            trig: Trig::Sin,
            multipliers,
            phase,
        }
    }

    pub(crate) const fn cos(amplitude: f64, multipliers: [f64; N], phase: Degree) -> Self {
        Term {
            amplitude,
            trig: Trig::Cos,
            multipliers,
            phase,
        }
    }
}

/// Sum of a perturbation series, in the unit of the amplitudes.
pub(crate) fn series<const N: usize>(terms: &[Term<N>], args: &[Radian; N]) -> f64 {
    terms
        .iter()
        .map(|t| {
            let arg = t
                .multipliers
                .iter()
                .zip(args)
                .map(|(c, a)| c * a)
                .sum::<f64>()
                + t.phase * RADEG;
            match t.trig {
                Trig::Sin => t.amplitude * arg.sin(),
                Trig::Cos => t.amplitude * arg.cos(),
            }
        })
        .sum()
}

#[cfg(test)]
mod bodies_test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_series() {
        let terms = [
            Term::sin(2.0, [1.0, 0.0], 0.0),
            Term::cos(-1.0, [0.0, 2.0], 90.0),
        ];
        // 2·sin(π/2) − cos(2·π/4 + π/2) = 2 + 1
        let s = series(&terms, &[PI / 2.0, PI / 4.0]);
        assert_abs_diff_eq!(s, 3.0, epsilon = 1e-15);
        assert_eq!(series::<2>(&[], &[1.0, 2.0]), 0.0);
    }
}
