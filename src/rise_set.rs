//! # Rise, transit and set
//!
//! Local times at which a body crosses a reference altitude `h₀`, and the time of its upper
//! transit, from its equatorial coordinates.
//!
//! ```text
//! cos(LHA) = (sin h₀ − sin φ·sin δ) / (cos φ·cos δ)
//! transit  = rev(α − GMST0 − λ) / 15.04107
//! rise/set = transit ∓ rev(acos(cos LHA)) / 15.04107
//! ```
//!
//! with `GMST0 = rev(L + 180°)` for a reference mean longitude `L`. When `|cos LHA| > 1` the
//! body never crosses `h₀` on that day: the result is classified as [`RiseSet::AlwaysAbove`] or
//! [`RiseSet::AlwaysBelow`] instead of feeding `acos` an argument out of its domain.
//!
//! All times have the UTC offset applied and are folded into `[0, 24)`.
use crate::constants::{Degree, Hour, Radian, ERAU, PARALLAX_HORIZON_ALTITUDE, RADEG};
use crate::constants::{SIDEREAL_RATE, SUN_HORIZON_ALTITUDE};
use crate::time::rev;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSet {
    /// The body crosses the reference altitude twice
    Regular { rise: Hour, transit: Hour, set: Hour },
    /// Circumpolar: the body stays above the reference altitude all day
    AlwaysAbove { transit: Hour },
    /// The body stays below the reference altitude all day
    AlwaysBelow { transit: Hour },
}

impl RiseSet {
    pub fn transit(&self) -> Hour {
        match *self {
            RiseSet::Regular { transit, .. }
            | RiseSet::AlwaysAbove { transit }
            | RiseSet::AlwaysBelow { transit } => transit,
        }
    }

    pub fn rise(&self) -> Option<Hour> {
        match *self {
            RiseSet::Regular { rise, .. } => Some(rise),
            _ => None,
        }
    }

    pub fn set(&self) -> Option<Hour> {
        match *self {
            RiseSet::Regular { set, .. } => Some(set),
            _ => None,
        }
    }

    pub fn is_circumpolar(&self) -> bool {
        matches!(self, RiseSet::AlwaysAbove { .. })
    }

    pub fn never_rises(&self) -> bool {
        matches!(self, RiseSet::AlwaysBelow { .. })
    }
}

/// Reference altitude of the Sun's upper limb at rise and set, radians.
pub fn sun_horizon_altitude() -> Radian {
    SUN_HORIZON_ALTITUDE * RADEG
}

/// Reference altitude of a body with a measurable parallax, radians.
///
/// ```text
/// h₀ = 29′ − asin(R⊕ / rg)
/// ```
///
/// Arguments
/// ---------
/// * `rg`: Earth–body distance in AU
pub fn parallax_horizon_altitude(rg: f64) -> Radian {
    PARALLAX_HORIZON_ALTITUDE * RADEG - (ERAU / rg).clamp(-1.0, 1.0).asin()
}

/// Fold a time of day into `[0, 24)`.
pub fn fold_hours(h: Hour) -> Hour {
    let r = h.rem_euclid(24.0);
    if r >= 24.0 {
        0.0
    } else {
        r
    }
}

/// Rise, transit and set of a body.
///
/// Arguments
/// ---------
/// * `right_ascension`, `declination`: equatorial coordinates of the body, radians
/// * `latitude`: observer latitude, radians
/// * `longitude`: observer longitude, degrees east
/// * `h0`: reference altitude, radians
/// * `reference_longitude`: mean longitude L defining GMST0, radians
/// * `utc_offset`: hours added to the UT results
///
/// Return
/// ------
/// * the classified result, see [`RiseSet`].
pub fn rise_set(
    right_ascension: Radian,
    declination: Radian,
    latitude: Radian,
    longitude: Degree,
    h0: Radian,
    reference_longitude: Radian,
    utc_offset: Hour,
) -> RiseSet {
    let cos_lha = (h0.sin() - latitude.sin() * declination.sin())
        / (latitude.cos() * declination.cos());

    let gmst0 = rev(reference_longitude / RADEG + 180.0);
    let transit = rev(right_ascension / RADEG - gmst0 - longitude) / SIDEREAL_RATE;
    let local_transit = fold_hours(transit + utc_offset);

    if cos_lha < -1.0 {
        return RiseSet::AlwaysAbove {
            transit: local_transit,
        };
    }
    if cos_lha > 1.0 {
        return RiseSet::AlwaysBelow {
            transit: local_transit,
        };
    }

    let half_arc = rev(cos_lha.acos() / RADEG) / SIDEREAL_RATE;
    RiseSet::Regular {
        rise: fold_hours(transit - half_arc + utc_offset),
        transit: local_transit,
        set: fold_hours(transit + half_arc + utc_offset),
    }
}
