//! Greenwich Mean Sidereal Time and Local Sidereal Time.
//!
//! All functions take Julian Dates on the universal-time scale and return
//! degrees. A single polynomial in centuries since J2000.0 covers every
//! supported date.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4.

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Length of one mean sidereal day in solar days.
pub const SIDEREAL_DAY_DAYS: f64 = 0.997_269_566_33;

/// Greenwich Mean Sidereal Time at a given universal-time Julian Date.
///
/// GMST = 280.46061837 + 360.98564736629·d + 0.000387933·T² − T³/38710000
/// where d = JD − 2451545.0 and T = d / 36525.
///
/// Returns degrees in [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = d / DAYS_PER_CENTURY;
    let gmst = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize(gmst)
}

/// Local Sidereal Time from GMST and observer east longitude, both degrees.
///
/// Returns degrees in [0, 360).
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    normalize(gmst_deg + longitude_east_deg)
}

fn normalize(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}
