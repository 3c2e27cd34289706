//! # Sidereal clock
//!
//! Conversion of a civil instant (local calendar date and hour, observer longitude, UTC offset)
//! into the two quantities that drive the whole engine:
//!
//! - the **day number** `d`, a continuous day count relative to J2000.0 (2000-01-01 12:00 UT),
//! - the **Local Sidereal Time** (LST), in radians, folded into `[0, 2π)`.
//!
//! Calendar validation, the wall clock and hour stepping with month/year rollover are
//! delegated to [`hifitime`]. The physics always uses the UT hour (local hour minus the UTC
//! offset), while the local calendar fields are kept untouched for display.
//!
//! ## See also
//! * [`crate::orbital_elements`] – consumes [`Instant::elements_day`]
//! * [`crate::projection`] – consumes [`Instant::lst`]
use hifitime::{Epoch, Unit};

use crate::constants::{Degree, Hour, Radian, DAY_NUMBER_OFFSET, ELEMENTS_EPOCH_SHIFT, RADEG};
use crate::constants::{DayNumber, SIDEREAL_RATE};
use crate::skymap_errors::SkyMapError;

const NANOS_PER_HOUR: f64 = 3.6e12;
const NANOS_PER_DAY: u64 = 86_400_000_000_000;

/// Fold an angle in degrees into `[0, 360)`.
///
/// Works for any finite real, including negative and very large values. A remainder that
/// rounds up to exactly 360 is mapped back to 0.
pub fn rev(x: Degree) -> Degree {
    let r = x.rem_euclid(360.0);
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Day number of a calendar date and UT hour.
///
/// ```text
/// d = 367·y − ⌊7·(y + ⌊(m+9)/12⌋)/4⌋ + ⌊275·m/9⌋ + D − 730531.5 + UT/24
/// ```
///
/// The `day` argument is allowed to overflow the month (day 32 of January is February 1st)
/// and `ut_hour` may be negative or exceed 24: the formula is linear in both.
///
/// Arguments
/// ---------
/// * `year`, `month`, `day`: calendar date (Gregorian)
/// * `ut_hour`: decimal hour in UT
///
/// Return
/// ------
/// * the day number, `-0.5` at 2000-01-01 00:00 UT
pub fn day_number(year: i32, month: u32, day: i32, ut_hour: Hour) -> DayNumber {
    let y = year as i64;
    let m = month as i64;
    let days = 367 * y - (7 * (y + (m + 9).div_euclid(12))).div_euclid(4)
        + (275 * m).div_euclid(9)
        + day as i64;
    days as f64 - DAY_NUMBER_OFFSET + ut_hour / 24.0
}

/// Local sidereal time in degrees, in `[0, 360)`.
///
/// Arguments
/// ---------
/// * `day_number`: see [`day_number`]
/// * `longitude`: observer longitude in degrees, east positive
/// * `ut_hour`: decimal hour in UT
pub fn local_sidereal_time(day_number: DayNumber, longitude: Degree, ut_hour: Hour) -> Degree {
    rev(100.46 + 0.985647 * day_number + longitude + ut_hour * SIDEREAL_RATE)
}

/// An immutable instant as seen by an observer.
///
/// Holds the local calendar fields used for display and the derived day number and LST used
/// by the physics. A new `Instant` is created on every time advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instant {
    year: i32,
    month: u8,
    day: u8,
    hour: Hour,
    longitude: Degree,
    utc_offset: Hour,
    day_number: DayNumber,
    lst: Radian,
}

impl Instant {
    /// Build an instant from a local calendar date and decimal hour.
    ///
    /// Arguments
    /// ---------
    /// * `year`, `month`, `day`: local calendar date
    /// * `hour`: local decimal hour in `[0, 24)`
    /// * `longitude`: observer longitude in degrees, east positive
    /// * `utc_offset`: hours to add to UT to get local time
    ///
    /// Return
    /// ------
    /// * the instant, or [`SkyMapError::InvalidDate`] if the calendar fields do not name a
    ///   real date or the hour is outside `[0, 24)`.
    pub fn from_calendar(
        year: i32,
        month: u8,
        day: u8,
        hour: Hour,
        longitude: Degree,
        utc_offset: Hour,
    ) -> Result<Self, SkyMapError> {
        if !(0.0..24.0).contains(&hour) {
            return Err(SkyMapError::InvalidDate(format!(
                "hour {hour} is outside [0, 24)"
            )));
        }
        if !longitude.is_finite() || !utc_offset.is_finite() {
            return Err(SkyMapError::InvalidObserver(format!(
                "longitude {longitude} and UTC offset {utc_offset} must be finite"
            )));
        }
        // Validation only: the epoch itself is not kept.
        local_epoch(year, month, day, hour)?;
        Ok(Self::derive(year, month, day, hour, longitude, utc_offset))
    }

    /// Read the wall clock.
    ///
    /// The local calendar fields are the UTC clock shifted by `utc_offset`; day number and LST
    /// are derived from the UT hour.
    pub fn now(longitude: Degree, utc_offset: Hour) -> Result<Self, SkyMapError> {
        if !longitude.is_finite() || !utc_offset.is_finite() {
            return Err(SkyMapError::InvalidObserver(format!(
                "longitude {longitude} and UTC offset {utc_offset} must be finite"
            )));
        }
        let utc = Epoch::now().map_err(|e| SkyMapError::Clock(e.to_string()))?;
        let (y, mo, d, h, mi, s, ns) = utc.to_gregorian_utc();
        let local = local_epoch(y, mo, d, hms_to_hour(h, mi, s, ns))? + Unit::Hour * utc_offset;
        Self::from_local_epoch(local, longitude, utc_offset)
    }

    /// Advance (or go back, for negative `hours`) by a number of hours, rolling the calendar
    /// over days, months and years.
    pub fn step_hours(&self, hours: Hour) -> Result<Self, SkyMapError> {
        let local = local_epoch(self.year, self.month, self.day, self.hour)? + Unit::Hour * hours;
        Self::from_local_epoch(local, self.longitude, self.utc_offset)
    }

    /// Same observer and calendar date, with a new local hour.
    pub fn with_hour(&self, hour: Hour) -> Result<Self, SkyMapError> {
        Self::from_calendar(
            self.year,
            self.month,
            self.day,
            hour,
            self.longitude,
            self.utc_offset,
        )
    }

    fn from_local_epoch(
        local: Epoch,
        longitude: Degree,
        utc_offset: Hour,
    ) -> Result<Self, SkyMapError> {
        let (y, mo, d, h, mi, s, ns) = local.to_gregorian_tai();
        let hour = hms_to_hour(h, mi, s, ns);
        Ok(Self::derive(y, mo, d, hour, longitude, utc_offset))
    }

    fn derive(
        year: i32,
        month: u8,
        day: u8,
        hour: Hour,
        longitude: Degree,
        utc_offset: Hour,
    ) -> Self {
        let ut_hour = hour - utc_offset;
        let dn = day_number(year, month as u32, day as i32, ut_hour);
        let lst = local_sidereal_time(dn, longitude, ut_hour) * RADEG;
        Instant {
            year,
            month,
            day,
            hour,
            longitude,
            utc_offset,
            day_number: dn,
            lst,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Local decimal hour
    pub fn hour(&self) -> Hour {
        self.hour
    }

    /// Decimal hour in UT (may fall outside `[0, 24)` near midnight)
    pub fn ut_hour(&self) -> Hour {
        self.hour - self.utc_offset
    }

    pub fn longitude(&self) -> Degree {
        self.longitude
    }

    pub fn utc_offset(&self) -> Hour {
        self.utc_offset
    }

    pub fn day_number(&self) -> DayNumber {
        self.day_number
    }

    /// Local sidereal time in radians, in `[0, 2π)`
    pub fn lst(&self) -> Radian {
        self.lst
    }

    /// Argument of the orbital element tables.
    ///
    /// The published low-precision elements are referred to 2000 January 0.0 UT, which lies
    /// 1.5 days before the origin of [`day_number`].
    pub fn elements_day(&self) -> DayNumber {
        self.day_number + ELEMENTS_EPOCH_SHIFT
    }

    /// Day number of the local midnight starting the current calendar day
    pub fn local_midnight_day_number(&self) -> DayNumber {
        day_number(
            self.year,
            self.month as u32,
            self.day as i32,
            -self.utc_offset,
        )
    }
}

/// Local calendar fields as a hifitime epoch.
///
/// TAI is used as a leap-second free proleptic calendar: the epoch only serves validation and
/// calendar arithmetic on local time.
fn local_epoch(year: i32, month: u8, day: u8, hour: Hour) -> Result<Epoch, SkyMapError> {
    let nanos = ((hour * NANOS_PER_HOUR).round() as u64).min(NANOS_PER_DAY - 1);
    let h = (nanos / 3_600_000_000_000) as u8;
    let mi = ((nanos / 60_000_000_000) % 60) as u8;
    let s = ((nanos / 1_000_000_000) % 60) as u8;
    let ns = (nanos % 1_000_000_000) as u32;
    Epoch::maybe_from_gregorian_tai(year, month, day, h, mi, s, ns)
        .map_err(|e| SkyMapError::InvalidDate(e.to_string()))
}

fn hms_to_hour(h: u8, mi: u8, s: u8, ns: u32) -> Hour {
    h as f64 + mi as f64 / 60.0 + (s as f64 + ns as f64 * 1e-9) / 3600.0
}
