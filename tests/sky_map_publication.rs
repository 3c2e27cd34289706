use approx::assert_abs_diff_eq;
use skymap::catalog::{Catalog, ConstellationStar, ContourPoint, MessierObject};
use skymap::config::SkyMapConfig;
use skymap::orbital_elements::Body;
use skymap::sky_map::SkyMap;
use skymap::skymap_errors::SkyMapError;

mod common;
use common::{assert_radec_close, assert_rise_set_close};

fn catalog() -> Catalog {
    let mut catalog = Catalog::default();
    catalog.stars = vec![
        ConstellationStar::new("Polaris", 2.530, 89.264, 1.97),
        ConstellationStar::new("Canopus", 6.399, -52.696, -0.74),
    ];
    catalog.messier = vec![MessierObject::new("M13", 16.695, 36.460, 5.8)];
    catalog.milky_way = vec![
        ContourPoint::from_hours_degrees(20.0, 40.0),
        ContourPoint::from_hours_degrees(20.5, 42.0),
        ContourPoint::Break,
        ContourPoint::from_hours_degrees(21.0, 45.0),
    ];
    catalog
}

fn sky() -> SkyMap {
    let config = SkyMapConfig::from_toml_str(
        r#"
        latitude = 60.0
        longitude = 15.0
        utc_offset = 0.0
        ecliptic_days_before = 10
        ecliptic_days_after = 20
        "#,
    )
    .unwrap();
    SkyMap::new(config, catalog()).unwrap()
}

#[test]
fn test_invalid_site() {
    let config = SkyMapConfig {
        latitude: -91.0,
        ..SkyMapConfig::default()
    };
    assert!(matches!(
        SkyMap::new(config, Catalog::default()),
        Err(SkyMapError::InvalidObserver(_))
    ));
}

#[test]
fn test_published_frame() {
    let mut sky = sky();
    assert!(sky.frame().is_none());

    let instant = sky.observer().instant(1990, 4, 19, 0.0).unwrap();
    let frame = sky.update(instant).unwrap();

    assert_eq!(frame.instant, instant);
    assert_eq!(frame.bodies.len(), Body::ALL.len());
    assert_eq!(frame.ecliptic.len(), 30);
    assert_eq!(frame.catalog.stars.len(), 2);
    assert_eq!(frame.catalog.messier.len(), 1);

    // Polaris never sets at 60°N, Canopus never rises
    assert!(frame.catalog.stars[0].visible);
    assert!(!frame.catalog.stars[1].visible);

    let saturn = &frame.body_by_id(Body::Saturn.id()).unwrap().body;
    assert_radec_close(saturn, 297.011526, -20.930955, 1e-4);
    assert_rise_set_close(&saturn.rise_set, 1.865423, 4.997829, 8.130235, 1e-4);

    let north = frame.cardinal_points.north.point;
    assert_abs_diff_eq!(north.coords.norm(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_step_republishes() {
    let mut sky = sky();
    let instant = sky.observer().instant(2024, 2, 28, 23.0).unwrap();
    sky.update(instant).unwrap();
    let first = sky.frame().cloned().unwrap();

    let next = sky.step_hours(25.0).unwrap();
    assert_eq!(
        (next.instant.year(), next.instant.month(), next.instant.day()),
        (2024, 3, 1)
    );
    assert_abs_diff_eq!(next.instant.hour(), 0.0, epsilon = 1e-9);
    assert_ne!(next.bodies, first.bodies);

    let back = sky.step_hours(-25.0).unwrap();
    assert_eq!((back.instant.month(), back.instant.day()), (2, 28));
    assert_abs_diff_eq!(back.instant.hour(), 23.0, epsilon = 1e-9);
}

#[test]
fn test_rejected_date_and_compute_leave_frame() {
    let mut sky = sky();
    let instant = sky.observer().instant(1990, 4, 19, 0.0).unwrap();
    sky.update(instant).unwrap();
    let published = sky.frame().cloned();

    // Feb 30 is rejected before anything is recomputed
    let bad = sky.observer().instant(1990, 2, 30, 0.0);
    assert!(matches!(bad, Err(SkyMapError::InvalidDate(_))));
    assert_eq!(sky.frame().cloned(), published);

    // computing a frame without publishing it leaves the published one alone
    let other = sky.observer().instant(2000, 1, 1, 0.0).unwrap();
    let fresh = sky.compute(&other).unwrap();
    assert_eq!(fresh.instant, other);
    assert_eq!(sky.frame().cloned(), published);
}

#[test]
fn test_failed_update_keeps_frame() {
    let mut sky = sky();
    let instant = sky.observer().instant(1990, 4, 19, 0.0).unwrap();
    sky.update(instant).unwrap();
    let published = sky.frame().cloned();

    // by AD 400000 the secular tables give Saturn |e| > 1
    let far = sky.observer().instant(400_000, 6, 1, 0.0).unwrap();
    assert!(matches!(sky.update(far), Err(SkyMapError::UnboundOrbit(_))));
    assert_eq!(sky.frame().cloned(), published);
    assert_eq!(sky.frame().map(|f| f.instant), Some(instant));

    // stepping from the kept frame still works
    let next = sky.step_hours(1.0).unwrap();
    assert_eq!(next.instant.day(), 19);
    assert_abs_diff_eq!(next.instant.hour(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_milky_way_in_frame() {
    let mut sky = sky();
    let instant = sky.observer().instant(1990, 4, 19, 0.0).unwrap();
    let frame = sky.update(instant).unwrap();
    // the break leaves one path of two points at most, never three
    assert!(frame.catalog.milky_way.iter().all(|path| path.len() == 2));
}
