//! # Configuration
//!
//! Observer site and display options of a [`SkyMap`](crate::sky_map::SkyMap), deserializable
//! from TOML:
//!
//! ```toml
//! latitude = 48.85
//! longitude = 2.35
//! utc_offset = 1.0
//! ecliptic_days_before = 100
//! ecliptic_days_after = 500
//! ```
//!
//! Every field is optional; missing ones take the values of [`SkyMapConfig::default`].
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Hour};
use crate::observer::Observer;
use crate::skymap_errors::SkyMapError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyMapConfig {
    /// Geodetic latitude, degrees north
    pub latitude: Degree,
    /// Longitude, degrees east
    pub longitude: Degree,
    /// Local time minus UT, hours
    pub utc_offset: Hour,
    /// Days of the ecliptic track before the current date
    pub ecliptic_days_before: u32,
    /// Days of the ecliptic track from the current date on
    pub ecliptic_days_after: u32,
}

impl Default for SkyMapConfig {
    fn default() -> Self {
        SkyMapConfig {
            latitude: 0.0,
            longitude: 0.0,
            utc_offset: 0.0,
            ecliptic_days_before: 100,
            ecliptic_days_after: 500,
        }
    }
}

impl SkyMapConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, SkyMapError> {
        let config: SkyMapConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the observer fields.
    pub fn validate(&self) -> Result<(), SkyMapError> {
        Observer::try_from(self).map(|_| ())
    }
}

impl TryFrom<&SkyMapConfig> for Observer {
    type Error = SkyMapError;

    fn try_from(config: &SkyMapConfig) -> Result<Self, Self::Error> {
        Observer::new(config.latitude, config.longitude, config.utc_offset)
    }
}
