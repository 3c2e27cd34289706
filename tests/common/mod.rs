#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use skymap::bodies::CelestialBody;
use skymap::constants::RADEG;
use skymap::observer::Observer;
use skymap::rise_set::RiseSet;
use skymap::time::Instant;

/// Observer at 60°N 15°E on UT, the site of the 1990 April 19 worked example.
pub fn observer_1990() -> Observer {
    Observer::new(60.0, 15.0, 0.0).unwrap()
}

pub fn instant_1990() -> Instant {
    observer_1990().instant(1990, 4, 19, 0.0).unwrap()
}

/// Observer on the equator and the Greenwich meridian.
pub fn observer_origin() -> Observer {
    Observer::new(0.0, 0.0, 0.0).unwrap()
}

pub fn instant_2000() -> Instant {
    observer_origin().instant(2000, 1, 1, 0.0).unwrap()
}

/// Compare a body's apparent right ascension and declination, in degrees.
pub fn assert_radec_close(body: &CelestialBody, ra_deg: f64, dec_deg: f64, epsilon: f64) {
    assert_abs_diff_eq!(
        body.position.right_ascension / RADEG,
        ra_deg,
        epsilon = epsilon
    );
    assert_abs_diff_eq!(body.position.declination / RADEG, dec_deg, epsilon = epsilon);
}

pub fn assert_rise_set_close(actual: &RiseSet, rise: f64, transit: f64, set: f64, epsilon: f64) {
    let (Some(r), Some(s)) = (actual.rise(), actual.set()) else {
        panic!("expected a body that rises and sets, got {actual:?}");
    };
    assert_abs_diff_eq!(r, rise, epsilon = epsilon);
    assert_abs_diff_eq!(actual.transit(), transit, epsilon = epsilon);
    assert_abs_diff_eq!(s, set, epsilon = epsilon);
}
