//! # Solar system solve
//!
//! Full recomputation of the Sun, the Moon and the planets for one instant, in their fixed
//! identity order. The Sun is solved first and passed explicitly to every other body, so a body
//! can never be combined with a Sun from another instant.
//!
//! Per body kind:
//!
//! | Kind   | Position            | Ephemeris            | h₀       | Reference longitude |
//! |--------|---------------------|----------------------|----------|---------------------|
//! | Sun    | [`SunPosition`]     | [`sun_ephemeris`]    | −0.833°  | Sun mean            |
//! | Planet | [`planet::compute`] | [`planet_ephemeris`] | parallax | Sun mean            |
//! | Moon   | [`MoonPosition`]    | [`moon_ephemeris`]   | parallax | Sun true            |
use log::trace;

use crate::bodies::moon::MoonPosition;
use crate::bodies::sun::SunPosition;
use crate::bodies::{planet, CelestialBody, Position};
use crate::constants::Radian;
use crate::ephemeris::{moon_ephemeris, planet_ephemeris, sun_ephemeris};
use crate::observer::Observer;
use crate::orbital_elements::{Body, BodyKind};
use crate::rise_set::{parallax_horizon_altitude, rise_set, sun_horizon_altitude, RiseSet};
use crate::skymap_errors::SkyMapError;
use crate::time::Instant;

/// All solved bodies for one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarSystem {
    sun: SunPosition,
    bodies: Vec<CelestialBody>,
}

impl SolarSystem {
    /// Solve every body of [`Body::ALL`].
    ///
    /// Arguments
    /// ---------
    /// * `instant`: the instant; its longitude and UTC offset are used for the rise/set times
    /// * `observer`: the site; its latitude drives rise/set and the Moon's parallax
    ///
    /// Return
    /// ------
    /// * the solved system, or the first Kepler solver error.
    pub fn compute(instant: &Instant, observer: &Observer) -> Result<Self, SkyMapError> {
        let d = instant.elements_day();
        let sun = SunPosition::compute(d)?;

        let bodies = Body::ALL
            .iter()
            .map(|&body| solve_body(body, instant, observer, &sun))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SolarSystem { sun, bodies })
    }

    pub fn sun(&self) -> &SunPosition {
        &self.sun
    }

    /// Bodies in identity order
    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn body(&self, body: Body) -> &CelestialBody {
        &self.bodies[body.id()]
    }

    pub fn by_id(&self, id: usize) -> Option<&CelestialBody> {
        self.bodies.get(id)
    }
}

fn solve_body(
    body: Body,
    instant: &Instant,
    observer: &Observer,
    sun: &SunPosition,
) -> Result<CelestialBody, SkyMapError> {
    let d = instant.elements_day();

    let (elements, position, ephemeris, h0, reference) = match body.kind() {
        BodyKind::Sun => (
            sun.elements,
            sun.position,
            sun_ephemeris(sun),
            sun_horizon_altitude(),
            sun.mean_longitude,
        ),
        BodyKind::Planet => {
            let (elements, position) = planet::compute(body, d, sun)?;
            (
                elements,
                position,
                planet_ephemeris(body, &position, sun, d),
                parallax_horizon_altitude(position.rg),
                sun.mean_longitude,
            )
        }
        BodyKind::Moon => {
            let moon = MoonPosition::compute(d, sun, observer, instant.lst())?;
            (
                moon.elements,
                moon.position,
                moon_ephemeris(&moon, sun),
                parallax_horizon_altitude(moon.position.rg),
                sun.true_longitude,
            )
        }
    };

    let rise_set = body_rise_set(&position, instant, observer, h0, reference);
    trace!("{body}: {ephemeris:?}, {rise_set:?}");

    Ok(CelestialBody {
        body,
        elements,
        position,
        ephemeris,
        rise_set,
    })
}

fn body_rise_set(
    position: &Position,
    instant: &Instant,
    observer: &Observer,
    h0: Radian,
    reference: Radian,
) -> RiseSet {
    rise_set(
        position.right_ascension,
        position.declination,
        observer.latitude(),
        instant.longitude(),
        h0,
        reference,
        instant.utc_offset(),
    )
}

#[cfg(test)]
mod solar_system_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn solve_1990() -> SolarSystem {
        let observer = Observer::new(60.0, 15.0, 0.0).unwrap();
        let instant = observer.instant(1990, 4, 19, 0.0).unwrap();
        SolarSystem::compute(&instant, &observer).unwrap()
    }

    #[test]
    fn test_identity_order() {
        let system = solve_1990();
        assert_eq!(system.bodies().len(), 9);
        for (idx, body) in system.bodies().iter().enumerate() {
            assert_eq!(body.id(), idx);
        }
        assert_eq!(system.by_id(3).map(|b| b.name()), Some("Moon"));
        assert!(system.by_id(9).is_none());
        assert_eq!(system.body(Body::Sun).position, system.sun().position);
    }

    fn check_rise_set(rs: &RiseSet, rise: f64, transit: f64, set: f64) {
        assert_abs_diff_eq!(rs.rise().unwrap(), rise, epsilon = 1e-4);
        assert_abs_diff_eq!(rs.transit(), transit, epsilon = 1e-4);
        assert_abs_diff_eq!(rs.set().unwrap(), set, epsilon = 1e-4);
    }

    #[test]
    fn test_rise_set_1990() {
        let system = solve_1990();
        check_rise_set(&system.body(Body::Sun).rise_set, 3.544666, 10.957940, 18.371215);
        check_rise_set(&system.body(Body::Moon).rise_set, 2.25120, 5.73883, 9.22646);
        check_rise_set(&system.body(Body::Mercury).rise_set, 3.62430, 12.06170, 20.49911);
        check_rise_set(&system.body(Body::Venus).rise_set, 3.05858, 8.17256, 13.28653);
        check_rise_set(&system.body(Body::Mars).rise_set, 2.96861, 7.27216, 11.57572);
        check_rise_set(&system.body(Body::Jupiter).rise_set, 6.41753, 15.53468, 0.65184);
        check_rise_set(&system.body(Body::Saturn).rise_set, 1.86542, 4.99783, 8.13023);
    }

    #[test]
    fn test_sun_rise_set_2000_equator() {
        let observer = Observer::new(0.0, 0.0, 0.0).unwrap();
        let instant = observer.instant(2000, 1, 1, 0.0).unwrap();
        let system = SolarSystem::compute(&instant, &observer).unwrap();
        check_rise_set(&system.body(Body::Sun).rise_set, 5.974401, 12.018215, 18.062029);
    }
}
