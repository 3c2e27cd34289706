//! # Observer site
//!
//! The observing site as needed by the engine: geodetic latitude, longitude (east positive),
//! the local UTC offset, and the geocentric latitude/radius used by the Moon's topocentric
//! parallax correction.
//!
//! ## Units
//!
//! - Latitude: **radians** internally, built from degrees.
//! - Longitude: **degrees**, east positive (it enters the sidereal time in degrees).
//! - UTC offset: **hours**, local = UT + offset.
//! - Geocentric radius: **Earth equatorial radii**.
use crate::constants::{Degree, Hour, Radian, EARTH_MAJOR_AXIS, EARTH_MINOR_AXIS, RADEG};
use crate::skymap_errors::SkyMapError;
use crate::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    latitude: Radian,
    longitude: Degree,
    utc_offset: Hour,
    geocentric_latitude: Radian,
    geocentric_radius: f64,
}

impl Observer {
    /// Create a new observer.
    ///
    /// Arguments
    /// ---------
    /// * `latitude`: geodetic latitude in degrees, in [−90, 90]
    /// * `longitude`: longitude in degrees, east positive
    /// * `utc_offset`: local time minus UT, in hours
    ///
    /// Return
    /// ------
    /// * the observer, or [`SkyMapError::InvalidObserver`] on out-of-range or non-finite input.
    pub fn new(latitude: Degree, longitude: Degree, utc_offset: Hour) -> Result<Self, SkyMapError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SkyMapError::InvalidObserver(format!(
                "latitude {latitude} is outside [-90, 90]"
            )));
        }
        if !longitude.is_finite() {
            return Err(SkyMapError::InvalidObserver(format!(
                "longitude {longitude} is not finite"
            )));
        }
        if !utc_offset.is_finite() {
            return Err(SkyMapError::InvalidObserver(format!(
                "UTC offset {utc_offset} is not finite"
            )));
        }

        let lat = latitude * RADEG;
        let (rho_cos_phi, rho_sin_phi) = lat_to_parallax(lat);
        Ok(Observer {
            latitude: lat,
            longitude,
            utc_offset,
            geocentric_latitude: rho_sin_phi.atan2(rho_cos_phi),
            geocentric_radius: rho_cos_phi.hypot(rho_sin_phi),
        })
    }

    /// Geodetic latitude, radians
    pub fn latitude(&self) -> Radian {
        self.latitude
    }

    /// Longitude, degrees east
    pub fn longitude(&self) -> Degree {
        self.longitude
    }

    pub fn utc_offset(&self) -> Hour {
        self.utc_offset
    }

    /// Geocentric latitude, radians
    pub fn geocentric_latitude(&self) -> Radian {
        self.geocentric_latitude
    }

    /// Distance to the Earth's centre, in Earth equatorial radii
    pub fn geocentric_radius(&self) -> f64 {
        self.geocentric_radius
    }

    /// Instant for a local calendar date and hour at this site.
    pub fn instant(
        &self,
        year: i32,
        month: u8,
        day: u8,
        hour: Hour,
    ) -> Result<Instant, SkyMapError> {
        Instant::from_calendar(year, month, day, hour, self.longitude, self.utc_offset)
    }

    /// Wall-clock instant at this site.
    pub fn now(&self) -> Result<Instant, SkyMapError> {
        Instant::now(self.longitude, self.utc_offset)
    }
}

/// Convert a geodetic latitude into normalized parallax coordinates at sea level.
///
/// ```text
/// u = atan( (sin φ · (b/a)) / cos φ )
/// ρ_sinφ = (b/a) · sin u
/// ρ_cosφ = cos u
/// ```
///
/// where `a` and `b` are the Earth's semi-major and semi-minor axes.
///
/// Returns
/// -------
/// A tuple `(rho_cos_phi, rho_sin_phi)` in Earth equatorial radii.
pub fn lat_to_parallax(lat: Radian) -> (f64, f64) {
    let axis_ratio = EARTH_MINOR_AXIS / EARTH_MAJOR_AXIS;

    // parametric latitude
    let u = (lat.sin() * axis_ratio).atan2(lat.cos());

    (u.cos(), axis_ratio * u.sin())
}
