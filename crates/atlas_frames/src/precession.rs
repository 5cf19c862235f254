//! Precession of the equinox along the ecliptic.
//!
//! Heliocentric element tables are referred to the fixed J2000 equinox,
//! while charts are read against the moving equinox of date. The shift
//! is the accumulated general precession p_A (IAU 2006, Capitaine et al.
//! 2003), applied as a pure rotation about the ecliptic pole. Motion of
//! the ecliptic plane itself (< 0.05″/yr) is neglected.

/// General precession in ecliptic longitude, arcseconds.
///
/// `t` = Julian centuries since J2000.0. Positive when the equinox has
/// moved westward, i.e. for dates after J2000.
pub fn general_precession_arcsec(t: f64) -> f64 {
    // p_A through t³; the t⁴, t⁵ terms stay below 1e-4″ over ±5 centuries.
    t * (5028.796_195 + t * (1.105_434_8 + t * 0.000_079_64))
}

/// General precession in ecliptic longitude, degrees.
pub fn general_precession_deg(t: f64) -> f64 {
    general_precession_arcsec(t) / 3600.0
}

/// Refer a J2000 ecliptic longitude to the mean equinox of date.
///
/// Result is in [0, 360).
pub fn j2000_to_date_longitude(lon_j2000_deg: f64, t: f64) -> f64 {
    crate::normalize_360(lon_j2000_deg + general_precession_deg(t))
}
