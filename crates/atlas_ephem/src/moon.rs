//! Geocentric Moon and the mean lunar points (nodes, apogee).
//!
//! The Moon is treated as a geocentric orbit with its own element set:
//! mean longitude, a perigee advancing ~40.7°/yr and a node regressing
//! ~19.3°/yr. On top of the equation of center the three largest solar
//! perturbations are applied (evection, variation, annual equation),
//! which keeps the longitude within about 0.3° of the full theory.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 47 mean
//! arguments; perturbation amplitudes from standard lunar theory.

use crate::kepler::equation_of_center;

const MEAN_LONGITUDE_J2000: f64 = 218.316_447_7;
const MEAN_MOTION_DEG_PER_DAY: f64 = 13.176_396_48;
const ECCENTRICITY: f64 = 0.054_9;
const INCLINATION_DEG: f64 = 5.145;

// Mean longitude of the Sun, for the elongation D.
const SUN_MEAN_LONGITUDE_J2000: f64 = 280.466_46;
const SUN_MEAN_MOTION: f64 = 0.985_647_36;
const SUN_MEAN_ANOMALY_J2000: f64 = 357.529_109_2;
const SUN_ANOMALY_MOTION: f64 = 0.985_600_28;

// Perturbation amplitudes, degrees.
const EVECTION: f64 = 1.274;
const VARIATION: f64 = 0.658;
const ANNUAL_EQUATION: f64 = -0.186;

/// Mean longitude of the lunar perigee, degrees (unnormalized).
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_perigee_deg(t: f64) -> f64 {
    83.353_246_5 + 4_069.013_728_7 * t - 0.010_320_0 * t * t - t * t * t / 80_053.0
}

/// Mean longitude of the ascending node Ω, degrees (unnormalized).
pub fn mean_node_deg(t: f64) -> f64 {
    125.044_547_9 - 1_934.136_289_1 * t + 0.002_075_4 * t * t + t * t * t / 467_441.0
}

/// Mean lunar apogee ("Black Moon Lilith"), degrees (unnormalized).
pub fn mean_apogee_deg(t: f64) -> f64 {
    mean_perigee_deg(t) + 180.0
}

/// Geocentric ecliptic longitude and latitude of the Moon, degrees.
///
/// `days` = days since J2000.0. Longitude is unnormalized.
pub fn moon_lon_lat_deg(days: f64) -> (f64, f64) {
    let t = days / atlas_time::DAYS_PER_CENTURY;

    let l = MEAN_LONGITUDE_J2000 + MEAN_MOTION_DEG_PER_DAY * days;
    let m = (l - mean_perigee_deg(t)).to_radians();
    let d = (l - SUN_MEAN_LONGITUDE_J2000 - SUN_MEAN_MOTION * days).to_radians();
    let m_sun = (SUN_MEAN_ANOMALY_J2000 + SUN_ANOMALY_MOTION * days).to_radians();

    let lon = l
        + equation_of_center(ECCENTRICITY, m).to_degrees()
        + EVECTION * (2.0 * d - m).sin()
        + VARIATION * (2.0 * d).sin()
        + ANNUAL_EQUATION * m_sun.sin();

    let u = (lon - mean_node_deg(t)).to_radians();
    let lat = (INCLINATION_DEG.to_radians().sin() * u.sin()).asin().to_degrees();

    (lon, lat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_frames::{normalize_360, wrap_delta};

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12, 0h TD: λ = 133.162655°, β = −3.229126°
        let days = 2_448_724.5 - atlas_time::J2000_JD;
        let (lon, lat) = moon_lon_lat_deg(days);
        assert!(wrap_delta(133.162_655, normalize_360(lon)).abs() < 0.5, "lon = {lon}");
        assert!((lat - -3.229_126).abs() < 0.2, "lat = {lat}");
    }

    #[test]
    fn latitude_bounded_by_inclination() {
        let mut days = -20_000.0;
        while days < 20_000.0 {
            let (_, lat) = moon_lon_lat_deg(days);
            assert!(lat.abs() <= INCLINATION_DEG + 1e-9, "lat = {lat}");
            days += 3.7;
        }
    }

    #[test]
    fn node_regresses_one_cycle_in_18_6_years() {
        let t = 18.6 / 100.0;
        let moved = mean_node_deg(t) - mean_node_deg(0.0);
        assert!((moved + 360.0).abs() < 2.0, "moved = {moved}");
    }

    #[test]
    fn apogee_opposes_perigee() {
        assert!((mean_apogee_deg(0.3) - mean_perigee_deg(0.3) - 180.0).abs() < 1e-9);
    }
}
