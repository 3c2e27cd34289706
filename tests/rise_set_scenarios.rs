use skymap::constants::RADEG;
use skymap::observer::Observer;
use skymap::orbital_elements::Body;
use skymap::rise_set::{rise_set, sun_horizon_altitude, RiseSet};
use skymap::solar_system::SolarSystem;

mod common;
use common::{assert_rise_set_close, instant_1990, instant_2000, observer_1990, observer_origin};

#[test]
fn test_sun_rise_set() {
    let system = SolarSystem::compute(&instant_1990(), &observer_1990()).unwrap();
    assert_rise_set_close(
        &system.body(Body::Sun).rise_set,
        3.544666,
        10.957940,
        18.371215,
        1e-4,
    );

    let system = SolarSystem::compute(&instant_2000(), &observer_origin()).unwrap();
    assert_rise_set_close(
        &system.body(Body::Sun).rise_set,
        5.974401,
        12.018215,
        18.062029,
        1e-4,
    );
}

#[test]
fn test_moon_and_planets_rise_set() {
    let system = SolarSystem::compute(&instant_1990(), &observer_1990()).unwrap();

    let expected = [
        (Body::Moon, 2.251199, 5.738830, 9.226461),
        (Body::Mercury, 3.624295, 12.061703, 20.499111),
        (Body::Uranus, 1.247657, 3.895961, 6.544265),
        (Body::Neptune, 1.272639, 4.246735, 7.220830),
    ];
    for (body, rise, transit, set) in expected {
        assert_rise_set_close(&system.body(body).rise_set, rise, transit, set, 1e-4);
    }
}

#[test]
fn test_utc_offset_shifts_times() {
    let utc = SolarSystem::compute(&instant_1990(), &observer_1990()).unwrap();

    let observer = Observer::new(60.0, 15.0, 2.0).unwrap();
    // same UT instant, two hours later on the local clock
    let instant = observer.instant(1990, 4, 19, 2.0).unwrap();
    let local = SolarSystem::compute(&instant, &observer).unwrap();

    let a = utc.body(Body::Sun).rise_set;
    let b = local.body(Body::Sun).rise_set;
    assert!((b.transit() - a.transit() - 2.0).abs() < 1e-9);
    assert!((b.rise().unwrap() - a.rise().unwrap() - 2.0).abs() < 1e-9);
}

#[test]
fn test_midnight_sun() {
    // Sun near the June solstice, far north: never sets
    let observer = Observer::new(78.2, 15.6, 0.0).unwrap();
    let instant = observer.instant(2024, 6, 21, 12.0).unwrap();
    let system = SolarSystem::compute(&instant, &observer).unwrap();
    let sun = system.body(Body::Sun).rise_set;
    assert!(sun.is_circumpolar());
    assert!((0.0..24.0).contains(&sun.transit()));

    // and stays down in December
    let instant = observer.instant(2024, 12, 21, 12.0).unwrap();
    let system = SolarSystem::compute(&instant, &observer).unwrap();
    assert!(system.body(Body::Sun).rise_set.never_rises());
}

#[test]
fn test_circumpolar_body() {
    let rs = rise_set(
        0.0,
        80.0 * RADEG,
        70.0 * RADEG,
        0.0,
        sun_horizon_altitude(),
        0.0,
        0.0,
    );
    assert!(matches!(rs, RiseSet::AlwaysAbove { .. }));
    assert!(rs.transit().is_finite());
}
