//! # SkyMap: frame computation and publication
//!
//! [`SkyMap`] is the entry point of the crate. It owns the observer configuration and the star
//! catalog, and publishes one [`SkyFrame`] per time-advance event: the solved solar-system
//! bodies, the projected catalog, the ecliptic track and the cardinal points, all in polar-map
//! coordinates where the zenith is the origin and the horizon is the unit circle.
//!
//! A frame is always computed in full, into a fresh value, and only then swapped in. A failed
//! recomputation leaves the previously published frame untouched, so a renderer never observes
//! a half-updated sky.
//!
//! ## Typical usage
//!
//! ```rust,no_run
//! use skymap::catalog::{Catalog, ConstellationStar};
//! use skymap::config::SkyMapConfig;
//! use skymap::sky_map::SkyMap;
//!
//! let config = SkyMapConfig::from_toml_str("latitude = 60.0\nlongitude = 15.0").unwrap();
//! let mut catalog = Catalog::default();
//! catalog.stars.push(ConstellationStar::new("Polaris", 2.530, 89.264, 1.97));
//!
//! let mut sky = SkyMap::new(config, catalog).unwrap();
//! sky.update_now().unwrap();
//! sky.step_hours(1.0).unwrap();
//!
//! if let Some(frame) = sky.frame() {
//!     for body in &frame.bodies {
//!         println!("{} visible: {}", body.body.name(), body.projected.visible);
//!     }
//! }
//! ```
//!
//! ## Errors
//!
//! Construction fails with [`SkyMapError::InvalidObserver`] for an out-of-range site.
//! Recomputation propagates [`SkyMapError`] from the clock, the calendar and the Kepler solver.
//!
//! ## See also
//! * [`SolarSystem::compute`] – per-instant solve of every body.
//! * [`Catalog::project`] – projection of the static catalog.
//! * [`Projector`] – the horizon transform shared by everything in a frame.
use log::debug;

use crate::bodies::sun::SunPosition;
use crate::bodies::CelestialBody;
use crate::catalog::{Catalog, CatalogProjection};
use crate::config::SkyMapConfig;
use crate::constants::{ELEMENTS_EPOCH_SHIFT, RADEG};
use crate::observer::Observer;
use crate::projection::{EquatorialCoords, Horizontal, ProjectedPoint, Projector};
use crate::skymap_errors::SkyMapError;
use crate::solar_system::SolarSystem;
use crate::time::Instant;

/// North, east, south and west on the horizon circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardinalPoints {
    pub north: ProjectedPoint,
    pub east: ProjectedPoint,
    pub south: ProjectedPoint,
    pub west: ProjectedPoint,
}

impl CardinalPoints {
    pub fn new() -> Self {
        let at = |azimuth_deg: f64| ProjectedPoint {
            point: Horizontal {
                altitude: 0.0,
                azimuth: azimuth_deg * RADEG,
            }
            .to_map(),
            visible: true,
        };
        CardinalPoints {
            north: at(0.0),
            east: at(90.0),
            south: at(180.0),
            west: at(270.0),
        }
    }
}

impl Default for CardinalPoints {
    fn default() -> Self {
        Self::new()
    }
}

/// A solved body and its place on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedBody {
    pub body: CelestialBody,
    pub projected: ProjectedPoint,
}

/// Everything the renderer reads for one instant.
///
/// Catalog outputs are parallel to the vectors of the [`Catalog`] they were projected from.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyFrame {
    pub instant: Instant,
    /// Solar-system bodies in identity order
    pub bodies: Vec<ProjectedBody>,
    pub catalog: CatalogProjection,
    /// Daily positions of the Sun around the current date
    pub ecliptic: Vec<ProjectedPoint>,
    pub cardinal_points: CardinalPoints,
}

impl SkyFrame {
    /// Body with the given identity, see [`Body::id`](crate::orbital_elements::Body::id).
    pub fn body_by_id(&self, id: usize) -> Option<&ProjectedBody> {
        self.bodies.get(id)
    }
}

/// The Sun's track over a window of days, one point per local midnight, projected with the
/// projector of the current instant.
///
/// Arguments
/// ---------
/// * `instant`: reference instant, its local date is day 0 of the window
/// * `projector`: horizon transform of the current instant
/// * `days_before`, `days_after`: window `[-days_before, days_after)` in days
pub fn ecliptic_track(
    instant: &Instant,
    projector: &Projector,
    days_before: u32,
    days_after: u32,
) -> Result<Vec<ProjectedPoint>, SkyMapError> {
    let midnight = instant.local_midnight_day_number() + ELEMENTS_EPOCH_SHIFT;

    (-(days_before as i64)..days_after as i64)
        .map(|k| {
            let sun = SunPosition::compute(midnight + k as f64)?;
            Ok(projector.project(&EquatorialCoords::new(
                sun.position.right_ascension,
                sun.position.declination,
            )))
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct SkyMap {
    config: SkyMapConfig,
    observer: Observer,
    catalog: Catalog,
    frame: Option<SkyFrame>,
}

impl SkyMap {
    /// Create a sky map for a configured observer and a loaded catalog.
    ///
    /// No frame is published until the first [`SkyMap::update`].
    pub fn new(config: SkyMapConfig, catalog: Catalog) -> Result<Self, SkyMapError> {
        let observer = Observer::try_from(&config)?;
        Ok(SkyMap {
            config,
            observer,
            catalog,
            frame: None,
        })
    }

    /// Compute a complete frame for `instant` without publishing it.
    ///
    /// Arguments
    /// ---------
    /// * `instant`: the time to render; its longitude and UTC offset are used as given
    ///
    /// Return
    /// ------
    /// * a fresh [`SkyFrame`], or the first error met by the solar-system solve.
    pub fn compute(&self, instant: &Instant) -> Result<SkyFrame, SkyMapError> {
        let projector = Projector::new(self.observer.latitude(), instant.lst());
        let system = SolarSystem::compute(instant, &self.observer)?;

        let bodies = system
            .bodies()
            .iter()
            .map(|body| ProjectedBody {
                body: *body,
                projected: projector.project(&EquatorialCoords::new(
                    body.position.right_ascension,
                    body.position.declination,
                )),
            })
            .collect::<Vec<_>>();

        let catalog = self.catalog.project(&projector);
        let ecliptic = ecliptic_track(
            instant,
            &projector,
            self.config.ecliptic_days_before,
            self.config.ecliptic_days_after,
        )?;

        debug!(
            "frame {}-{:02}-{:02} {:.4} h: d = {:.5}, lst = {:.4} deg, {} bodies up, {} stars",
            instant.year(),
            instant.month(),
            instant.day(),
            instant.hour(),
            instant.day_number(),
            instant.lst() / RADEG,
            bodies.iter().filter(|b| b.projected.visible).count(),
            catalog.stars.len(),
        );

        Ok(SkyFrame {
            instant: *instant,
            bodies,
            catalog,
            ecliptic,
            cardinal_points: CardinalPoints::new(),
        })
    }

    /// Recompute for `instant` and publish the result.
    ///
    /// On error the previously published frame is kept.
    pub fn update(&mut self, instant: Instant) -> Result<&SkyFrame, SkyMapError> {
        let frame = self.compute(&instant)?;
        Ok(self.frame.insert(frame))
    }

    /// Publish a frame for the wall-clock time at the configured observer.
    pub fn update_now(&mut self) -> Result<&SkyFrame, SkyMapError> {
        let instant = self.observer.now()?;
        self.update(instant)
    }

    /// Advance the published frame by `hours` (negative to go back).
    ///
    /// Starts from the wall clock when nothing is published yet.
    pub fn step_hours(&mut self, hours: f64) -> Result<&SkyFrame, SkyMapError> {
        let current = match &self.frame {
            Some(frame) => frame.instant,
            None => self.observer.now()?,
        };
        self.update(current.step_hours(hours)?)
    }

    /// Last published frame
    pub fn frame(&self) -> Option<&SkyFrame> {
        self.frame.as_ref()
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn config(&self) -> &SkyMapConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
