//! Calendar and sidereal-time conversions.
//!
//! This crate provides:
//! - Julian Date ↔ proleptic Gregorian calendar conversions
//! - Validated civil date/time input and an explicit time reference frame
//! - Greenwich Mean Sidereal Time and Local Sidereal Time
//! - `JulianMoment`, the per-computation time anchor used by the engine

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

use serde::{Deserialize, Serialize};

pub use civil::{CivilTime, TimeReference};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, calendar_to_jd, centuries_since_j2000, days_in_month,
    is_leap_year, jd_to_calendar,
};
pub use sidereal::{SIDEREAL_DAY_DAYS, gmst_deg, local_sidereal_time_deg};

/// Julian Day on the universal-time scale plus the matching GST.
///
/// Created per computation; the rest of the engine reads time only
/// through this value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JulianMoment {
    /// Julian Day (universal time).
    pub jd: f64,
    /// Greenwich Mean Sidereal Time in degrees, [0, 360).
    pub gst_deg: f64,
}

impl JulianMoment {
    /// Anchor a computation at a universal-time Julian Day.
    pub fn from_jd(jd: f64) -> Self {
        Self {
            jd,
            gst_deg: gmst_deg(jd),
        }
    }

    /// Anchor a computation at a civil time expressed in `reference`.
    pub fn from_civil(civil: &CivilTime, reference: TimeReference) -> Result<Self, TimeError> {
        let reference = reference.validate()?;
        Ok(Self::from_jd(reference.to_universal_jd(civil.to_jd())))
    }

    /// Julian centuries since J2000.0.
    pub fn centuries(&self) -> f64 {
        centuries_since_j2000(self.jd)
    }

    /// Local sidereal time at `longitude_east_deg`, degrees [0, 360).
    pub fn local_sidereal_deg(&self, longitude_east_deg: f64) -> f64 {
        local_sidereal_time_deg(self.gst_deg, longitude_east_deg)
    }

    /// Universal-time calendar instant of this moment.
    pub fn to_calendar(&self) -> (i32, u32, f64) {
        jd_to_calendar(self.jd)
    }
}
