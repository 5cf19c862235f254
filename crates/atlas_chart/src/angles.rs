//! Chart angles: Ascendant, Midheaven and their opposites.
//!
//! Standard spherical-astronomy formulas for the ecliptic longitude of the
//! meridian (MC) and eastern horizon (ASC) crossings, given local sidereal
//! time and latitude. The obliquity is held at its J2000 value.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13;
//! Montenbruck & Pfleger.

use atlas_frames::{COS_OBL, SIN_OBL, normalize_360};
use serde::{Deserialize, Serialize};

/// Ecliptic longitude of the Midheaven, degrees [0, 360).
///
/// `MC = atan2(sin LST, cos LST · cos ε)`. Independent of latitude.
pub fn midheaven_deg(lst_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    normalize_360(f64::atan2(lst.sin(), lst.cos() * COS_OBL).to_degrees())
}

/// Ecliptic longitude of the Ascendant, degrees [0, 360).
///
/// `ASC = atan2(cos LST, −(sin LST · cos ε + tan φ · sin ε))`, then forced
/// into the eastern half of the chart: `(ASC − MC) mod 360` must lie in
/// (0, 180), otherwise the opposite point is taken. The correction only
/// fires inside the polar circles, where the raw formula can pick the
/// setting point.
pub fn ascendant_deg(lst_deg: f64, latitude_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let raw = f64::atan2(lst.cos(), -(lst.sin() * COS_OBL + phi.tan() * SIN_OBL));
    let asc = normalize_360(raw.to_degrees());

    let from_mc = normalize_360(asc - midheaven_deg(lst_deg));
    if from_mc > 0.0 && from_mc < 180.0 {
        asc
    } else {
        normalize_360(asc + 180.0)
    }
}

/// The four chart angles, degrees [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartAngles {
    pub ascendant_deg: f64,
    pub midheaven_deg: f64,
    /// Always `ascendant_deg + 180` mod 360.
    pub descendant_deg: f64,
    /// Always `midheaven_deg + 180` mod 360.
    pub imum_coeli_deg: f64,
}

impl ChartAngles {
    /// Compute all four angles from local sidereal time and latitude.
    pub fn compute(lst_deg: f64, latitude_deg: f64) -> Self {
        let ascendant_deg = ascendant_deg(lst_deg, latitude_deg);
        let midheaven_deg = midheaven_deg(lst_deg);
        Self {
            ascendant_deg,
            midheaven_deg,
            descendant_deg: normalize_360(ascendant_deg + 180.0),
            imum_coeli_deg: normalize_360(midheaven_deg + 180.0),
        }
    }
}
