//! Ecliptic → equatorial coordinate conversion.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 13.3 and 13.4,
//! with the J2000 mean obliquity.

use crate::angle::normalize_360;
use crate::obliquity::{COS_OBL, SIN_OBL};

/// Right ascension and declination, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension in [0, 360).
    pub ra_deg: f64,
    /// Declination in [-90, 90].
    pub dec_deg: f64,
}

/// Convert ecliptic longitude/latitude to right ascension/declination.
///
/// `α = atan2(sin λ cos ε − tan β sin ε, cos λ)`
/// `δ = asin(sin β cos ε + cos β sin ε sin λ)`
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64) -> EquatorialCoords {
    let lam = lon_deg.to_radians();
    let beta = lat_deg.to_radians();

    let ra = f64::atan2(lam.sin() * COS_OBL - beta.tan() * SIN_OBL, lam.cos());
    let sin_dec = beta.sin() * COS_OBL + beta.cos() * SIN_OBL * lam.sin();

    EquatorialCoords {
        ra_deg: normalize_360(ra.to_degrees()),
        dec_deg: sin_dec.clamp(-1.0, 1.0).asin().to_degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obliquity::OBLIQUITY_J2000_DEG;

    #[test]
    fn equinox_points() {
        let c = ecliptic_to_equatorial(0.0, 0.0);
        assert!(c.ra_deg.abs() < 1e-12 && c.dec_deg.abs() < 1e-12);

        let c = ecliptic_to_equatorial(180.0, 0.0);
        assert!((c.ra_deg - 180.0).abs() < 1e-10 && c.dec_deg.abs() < 1e-10);
    }

    #[test]
    fn solstice_declination_equals_obliquity() {
        let c = ecliptic_to_equatorial(90.0, 0.0);
        assert!((c.ra_deg - 90.0).abs() < 1e-10);
        assert!((c.dec_deg - OBLIQUITY_J2000_DEG).abs() < 1e-10);

        let c = ecliptic_to_equatorial(270.0, 0.0);
        assert!((c.ra_deg - 270.0).abs() < 1e-10);
        assert!((c.dec_deg + OBLIQUITY_J2000_DEG).abs() < 1e-10);
    }

    #[test]
    fn meeus_example_13a() {
        // Pollux: λ = 113.215630°, β = 6.684170°, ε = 23.4392911°
        // → α = 116.328942°, δ = 28.026183°
        let c = ecliptic_to_equatorial(113.215_630, 6.684_170);
        assert!((c.ra_deg - 116.328_942).abs() < 1e-4, "ra = {}", c.ra_deg);
        assert!((c.dec_deg - 28.026_183).abs() < 1e-4, "dec = {}", c.dec_deg);
    }
}
